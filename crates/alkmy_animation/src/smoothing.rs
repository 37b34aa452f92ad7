//! Exponential smoothing
//!
//! A first-order low-pass filter: each step moves the value a fraction
//! `1 - e^(-dt/tau)` of the remaining distance toward the target. Unlike a
//! spring there is no overshoot, and the result is independent of how the
//! elapsed time is split into frames.

/// Default smoothing time constant in seconds
pub const SMOOTH_TAU: f32 = 0.25;

/// Fraction of the remaining distance covered in `dt` seconds
///
/// Returns 0.0 for non-positive or non-finite `dt`, and 1.0 (snap) when
/// `tau` is not positive.
pub fn easing_factor(dt: f32, tau: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / tau).exp()
}

/// Configuration for an exponential smoother
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
    /// Time constant in seconds (time to cover ~63% of the distance)
    pub tau: f32,
}

impl SmoothingConfig {
    pub fn new(tau: f32) -> Self {
        Self { tau }
    }

    /// Reaches the target instantly
    pub fn instant() -> Self {
        Self { tau: 0.0 }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { tau: SMOOTH_TAU }
    }
}

/// A value eased exponentially toward a target
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    config: SmoothingConfig,
    value: f32,
    target: f32,
}

impl Smoother {
    pub fn new(config: SmoothingConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Check if the value is within `epsilon` of the target
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() < epsilon
    }

    /// Advance by `dt` seconds and return the new value
    pub fn step(&mut self, dt: f32) -> f32 {
        let factor = easing_factor(dt, self.config.tau);
        self.value += (self.target - self.value) * factor;
        self.value
    }
}
