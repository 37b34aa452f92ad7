//! Velocity integration
//!
//! Each frame the current velocity is eased toward the target with an
//! exponential low-pass filter (so hover pauses decelerate instead of
//! stopping dead), then the offset advances and wraps modulo the sequence
//! extent.

use alkmy_animation::{wrap_offset, Smoother, SmoothingConfig};
use alkmy_core::fsm::{events, StateTransitions};
use alkmy_core::{Affine2D, Axis};

/// Lifecycle of the integrator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// Nothing measured yet; offset frozen at zero
    #[default]
    Idle,
    /// A positive extent has been seen; offset advances each frame
    Running,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}

impl StateTransitions for LoopState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (LoopState::Idle, events::MEASURED) => Some(LoopState::Running),
            // Once sized, the loop never returns to Idle
            _ => None,
        }
    }
}

/// Position and speed of the track
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    /// Scroll position within one sequence, in `[0, extent)`
    pub offset: f32,
    /// Current signed speed in pixels per second
    pub velocity: f32,
}

/// Owns the motion state of one loop
#[derive(Clone, Debug)]
pub struct VelocityIntegrator {
    state: LoopState,
    offset: f32,
    velocity: Smoother,
}

impl VelocityIntegrator {
    pub fn new() -> Self {
        Self::with_smoothing(SmoothingConfig::default())
    }

    /// Use a custom velocity smoothing
    pub fn with_smoothing(smoothing: SmoothingConfig) -> Self {
        Self {
            state: LoopState::Idle,
            offset: 0.0,
            velocity: Smoother::new(smoothing, 0.0),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn motion(&self) -> MotionState {
        MotionState {
            offset: self.offset,
            velocity: self.velocity.value(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn velocity(&self) -> f32 {
        self.velocity.value()
    }

    /// Re-wrap the offset into a newly measured extent
    ///
    /// Returns true if this observation moved the integrator out of Idle.
    pub fn observe_extent(&mut self, extent: f32) -> bool {
        if !(extent.is_finite() && extent > 0.0) {
            return false;
        }
        self.offset = wrap_offset(self.offset, extent);
        let started = self.state.apply(events::MEASURED);
        if started {
            tracing::debug!(extent, "VelocityIntegrator: Idle -> Running");
        }
        started
    }

    /// Advance one frame of `dt` seconds toward `target` velocity
    ///
    /// Velocity is eased in every state. The offset only moves when the
    /// extent is positive; otherwise it holds where it is.
    pub fn step(&mut self, dt: f32, target: f32, extent: f32) -> MotionState {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.velocity.set_target(target);
        let velocity = self.velocity.step(dt);

        if extent.is_finite() && extent > 0.0 {
            self.observe_extent(extent);
            self.offset = wrap_offset(self.offset + velocity * dt, extent);
        }

        self.motion()
    }

    /// Translation applied to the track: `-offset` along `axis`
    pub fn transform(&self, axis: Axis) -> Affine2D {
        axis.translation(-self.offset)
    }
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        Self::new()
    }
}
