//! Event-driven state transitions
//!
//! Animator lifecycles are small finite state machines. Each state enum
//! implements [`StateTransitions`] and answers, for a given event, which
//! state it moves to (or `None` to stay put).
//!
//! ```rust
//! use alkmy_core::fsm::{events, StateTransitions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Light {
//!     Off,
//!     On,
//! }
//!
//! impl StateTransitions for Light {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Light::Off, events::MEASURED) => Some(Light::On),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Light::Off.on_event(events::MEASURED), Some(Light::On));
//! ```

use std::hash::Hash;

/// Events shared by animator state machines
pub mod events {
    /// A positive extent was measured
    pub const MEASURED: u32 = 1;
}

/// A state enum with event-driven transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place, returning true if the state changed
    fn apply(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }
}
