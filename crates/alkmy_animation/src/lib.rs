//! Alkmy Animation System
//!
//! Frame-driven primitives for decorative motion.
//!
//! # Features
//!
//! - **Exponential Smoothing**: low-pass filter that eases a value toward a target
//! - **Wraparound**: non-negative modular offsets for seamless loops
//! - **Frame Clock**: timestamp-to-delta conversion with clean restarts
//! - **Frame Loop**: cooperative tick scheduler driven by the host
//! - **Particle Schedules**: randomized, staggered start times for flow diagrams
//! - **Step Cycles**: fixed-interval highlighting of sequential steps

pub mod clock;
pub mod cycle;
pub mod scheduler;
pub mod smoothing;
pub mod stagger;
pub mod wrap;

pub use clock::FrameClock;
pub use cycle::{StepCycle, StepHighlight};
pub use scheduler::{FrameLoop, TickCallback, TickCallbackId};
pub use smoothing::{easing_factor, Smoother, SmoothingConfig, SMOOTH_TAU};
pub use stagger::{ParticleSchedule, ParticleTiming, StaggerConfig};
pub use wrap::wrap_offset;
