//! Frame clock
//!
//! Converts host frame timestamps (milliseconds, as delivered by a display
//! refresh callback) into elapsed seconds between frames.

/// Tracks the last frame timestamp and yields per-frame deltas
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return seconds elapsed since the previous one
    ///
    /// The first frame after construction or [`reset`](Self::reset) yields
    /// 0.0. Timestamps that go backwards yield 0.0 rather than a negative
    /// delta.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let last = self.last_timestamp_ms.unwrap_or(timestamp_ms);
        self.last_timestamp_ms = Some(timestamp_ms);
        ((timestamp_ms - last).max(0.0) / 1000.0) as f32
    }

    /// Forget the last timestamp so the next frame starts from zero
    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(12_345.0), 0.0);
        assert!((clock.delta(12_361.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_clamps() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
        // The backwards timestamp becomes the new reference
        assert!((clock.delta(1000.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_reset_prevents_stale_jump() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        clock.delta(16.0);
        clock.reset();
        assert_eq!(clock.last_timestamp(), None);

        // Remount an hour later: no huge delta
        assert_eq!(clock.delta(3_600_000.0), 0.0);
    }
}
