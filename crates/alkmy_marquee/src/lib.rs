//! Alkmy Marquee
//!
//! A seamless, continuously scrolling loop of logos (or any items).
//!
//! # Features
//!
//! - **Measured Copies**: renders just enough copies of the sequence to cover
//!   the container plus headroom, so the wrap point is never visible
//! - **Smoothed Velocity**: speed changes (pause on hover) ease in and out
//!   with an exponential low-pass filter
//! - **Wraparound Offsets**: the offset always stays within one sequence
//! - **Host-Agnostic**: the host supplies measurements and frame ticks; no
//!   display surface is needed to drive or test the loop
//!
//! # Lifecycle
//!
//! ```text
//! mount() ──> [Idle] ──(first positive extent)──> [Running] ──> stop()
//!               │                                     │
//!               └──── tick(dt) eases velocity ────────┘
//! ```

pub mod config;
pub mod copies;
pub mod error;
pub mod integrator;
pub mod item;
pub mod logo_loop;
pub mod measure;
pub mod observer;

pub use config::{ContainerWidth, LogoLoopConfig};
pub use copies::{copy_count, render_copies, LoopCopy, RenderedItem, COPY_HEADROOM, MAX_COPIES, MIN_COPIES};
pub use error::{ConfigError, Result};
pub use integrator::{LoopState, MotionState, VelocityIntegrator};
pub use item::{ImageSource, ItemVisual, LoopItem, NodeVisual};
pub use logo_loop::LogoLoop;
pub use measure::{ImageLoadTracker, MeasureOutcome, MeasureSource, Measurement, SequenceMeasurer};
pub use observer::{ObserveMode, Observer};
