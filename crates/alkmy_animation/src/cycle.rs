//! Step highlight cycling
//!
//! A process diagram highlights its steps one after another at a fixed
//! interval, then lights all of them at once before starting over. With
//! `n` steps that is `n + 1` phases.

/// Default interval between phases in milliseconds
pub const DEFAULT_INTERVAL_MS: f32 = 3000.0;

/// What the current phase highlights
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepHighlight {
    /// A single step
    Step(usize),
    /// Every step at once
    All,
}

/// Phase counter advanced by accumulated frame time
#[derive(Clone, Debug)]
pub struct StepCycle {
    step_count: usize,
    interval_ms: f32,
    elapsed_ms: f32,
    phase: usize,
}

impl StepCycle {
    pub fn new(step_count: usize) -> Self {
        Self::with_interval(step_count, DEFAULT_INTERVAL_MS)
    }

    pub fn with_interval(step_count: usize, interval_ms: f32) -> Self {
        Self {
            step_count,
            interval_ms,
            elapsed_ms: 0.0,
            phase: 0,
        }
    }

    /// Number of phases in one full cycle
    pub fn phase_count(&self) -> usize {
        self.step_count + 1
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn highlight(&self) -> StepHighlight {
        if self.phase < self.step_count {
            StepHighlight::Step(self.phase)
        } else {
            StepHighlight::All
        }
    }

    /// Check whether step `index` is lit in the current phase
    pub fn is_active(&self, index: usize) -> bool {
        match self.highlight() {
            StepHighlight::Step(i) => i == index,
            StepHighlight::All => index < self.step_count,
        }
    }

    /// Advance by `dt` seconds; returns true if the phase changed
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.interval_ms <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let elapsed = f64::from(self.elapsed_ms) + f64::from(dt) * 1000.0;
        let interval = f64::from(self.interval_ms);
        let advanced = (elapsed / interval).floor();
        self.elapsed_ms = elapsed.rem_euclid(interval) as f32;
        if advanced < 1.0 {
            return false;
        }

        let phases = self.phase_count();
        let steps = advanced.rem_euclid(phases as f64) as usize;
        self.phase = (self.phase + steps) % phases;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_steps_then_all() {
        let mut cycle = StepCycle::new(3);
        assert_eq!(cycle.highlight(), StepHighlight::Step(0));

        assert!(cycle.tick(3.0));
        assert_eq!(cycle.highlight(), StepHighlight::Step(1));
        cycle.tick(3.0);
        assert_eq!(cycle.highlight(), StepHighlight::Step(2));
        cycle.tick(3.0);
        assert_eq!(cycle.highlight(), StepHighlight::All);
        assert!(cycle.is_active(0) && cycle.is_active(2));
        assert!(!cycle.is_active(3));

        cycle.tick(3.0);
        assert_eq!(cycle.phase(), 0);
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut cycle = StepCycle::new(3);
        for _ in 0..179 {
            assert!(!cycle.tick(1.0 / 60.0));
        }
        assert!(cycle.tick(1.0 / 60.0 + 0.001));
        assert!(cycle.is_active(1));
    }

    #[test]
    fn test_multiple_intervals_in_one_tick() {
        let mut cycle = StepCycle::new(3);
        // 7 intervals: 7 % 4 phases = 3
        assert!(cycle.tick(21.5));
        assert_eq!(cycle.highlight(), StepHighlight::All);

        // The leftover 0.5s still counts toward the next phase
        assert!(cycle.tick(2.5));
        assert_eq!(cycle.phase(), 0);
    }

    #[test]
    fn test_huge_dt_returns_with_a_valid_phase() {
        let mut cycle = StepCycle::new(3);
        cycle.tick(1.0e12);
        assert!(cycle.phase() < cycle.phase_count());

        let mut later = cycle.clone();
        later.tick(f32::MAX);
        assert!(later.phase() < later.phase_count());
    }

    #[test]
    fn test_zero_steps_only_has_all_phase() {
        let mut cycle = StepCycle::new(0);
        assert_eq!(cycle.highlight(), StepHighlight::All);
        cycle.tick(10.0);
        assert_eq!(cycle.phase(), 0);
        assert!(!cycle.is_active(0));
    }
}
