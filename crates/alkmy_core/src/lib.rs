//! Alkmy Core
//!
//! Foundational primitives shared by the Alkmy motion crates:
//!
//! - **Geometry**: points, sizes, vectors and 2D affine transforms
//! - **Directions**: loop directions and the axis they travel along
//! - **State Transitions**: event-driven state enums for animator lifecycles
//!
//! # Example
//!
//! ```rust
//! use alkmy_core::{Affine2D, Axis, Direction};
//!
//! let direction: Direction = "up".parse().unwrap();
//! assert_eq!(direction.axis(), Axis::Vertical);
//!
//! let transform = direction.axis().translation(-42.0);
//! assert_eq!(transform, Affine2D::translation(0.0, -42.0));
//! ```

pub mod direction;
pub mod error;
pub mod fsm;
pub mod geometry;

pub use direction::{Axis, Direction};
pub use error::{CoreError, Result};
pub use fsm::StateTransitions;
pub use geometry::{Affine2D, Point, Size, Vec2};
