//! Staggered particle schedules
//!
//! Flow diagrams send one particle down each incoming path on a repeating
//! cycle. Each path gets its own random duration and start delay so the
//! particles never march in lockstep; an outgoing particle is released once
//! the first incoming one has (almost) arrived.

use rand::Rng;

/// Ranges used to randomize particle timings (seconds)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    pub min_duration: f32,
    pub max_duration: f32,
    pub max_delay: f32,
    /// Fraction of a trip after which a particle counts as arrived
    pub arrival_fraction: f32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            min_duration: 4.0,
            max_duration: 7.0,
            max_delay: 5.0,
            arrival_fraction: 0.95,
        }
    }
}

/// Timing of one repeating particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleTiming {
    /// Seconds for one trip along the path
    pub duration: f32,
    /// Seconds before the first trip starts
    pub delay: f32,
}

impl ParticleTiming {
    pub fn new(duration: f32, delay: f32) -> Self {
        Self { duration, delay }
    }

    /// Time at which the first trip reaches `fraction` of the path
    pub fn arrival(&self, fraction: f32) -> f32 {
        self.delay + fraction * self.duration
    }

    /// Progress through the current trip at `elapsed` seconds, or None
    /// before the first trip has started
    pub fn progress_at(&self, elapsed: f32) -> Option<f32> {
        if elapsed < self.delay || self.duration <= 0.0 {
            return None;
        }
        Some(((elapsed - self.delay) % self.duration) / self.duration)
    }
}

/// Timings for every incoming path plus the derived outgoing delay
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSchedule {
    timings: Vec<ParticleTiming>,
    insight_delay: Option<f32>,
}

impl ParticleSchedule {
    /// Build a schedule from explicit timings
    pub fn from_timings(timings: Vec<ParticleTiming>, config: &StaggerConfig) -> Self {
        let insight_delay = timings
            .iter()
            .map(|t| t.arrival(config.arrival_fraction))
            .reduce(f32::min);
        Self {
            timings,
            insight_delay,
        }
    }

    /// Randomize timings for `count` paths using `rng`
    pub fn generate<R: Rng + ?Sized>(count: usize, config: &StaggerConfig, rng: &mut R) -> Self {
        let timings = (0..count)
            .map(|_| {
                let duration = if config.max_duration > config.min_duration {
                    rng.random_range(config.min_duration..config.max_duration)
                } else {
                    config.min_duration
                };
                let delay = if config.max_delay > 0.0 {
                    rng.random_range(0.0..config.max_delay)
                } else {
                    0.0
                };
                ParticleTiming::new(duration, delay)
            })
            .collect();
        let schedule = Self::from_timings(timings, config);
        tracing::debug!(
            paths = count,
            insight_delay = ?schedule.insight_delay,
            "ParticleSchedule: generated"
        );
        schedule
    }

    /// Randomize timings with the thread-local generator
    pub fn random(count: usize, config: &StaggerConfig) -> Self {
        Self::generate(count, config, &mut rand::rng())
    }

    pub fn timings(&self) -> &[ParticleTiming] {
        &self.timings
    }

    /// Seconds before the outgoing particle starts (None with no paths)
    pub fn insight_delay(&self) -> Option<f32> {
        self.insight_delay
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_timings_in_range() {
        let config = StaggerConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let schedule = ParticleSchedule::generate(5, &config, &mut rng);

        assert_eq!(schedule.len(), 5);
        for t in schedule.timings() {
            assert!((4.0..7.0).contains(&t.duration));
            assert!((0.0..5.0).contains(&t.delay));
        }
    }

    #[test]
    fn test_insight_delay_is_first_arrival() {
        let config = StaggerConfig::default();
        let schedule = ParticleSchedule::from_timings(
            vec![
                ParticleTiming::new(4.0, 3.0), // 3 + 3.8 = 6.8
                ParticleTiming::new(6.0, 0.5), // 0.5 + 5.7 = 6.2
                ParticleTiming::new(5.0, 2.0), // 2 + 4.75 = 6.75
            ],
            &config,
        );

        let delay = schedule.insight_delay().unwrap();
        assert!((delay - 6.2).abs() < 1e-5);
    }

    #[test]
    fn test_empty_schedule_has_no_insight() {
        let schedule = ParticleSchedule::from_timings(Vec::new(), &StaggerConfig::default());
        assert!(schedule.is_empty());
        assert_eq!(schedule.insight_delay(), None);
    }

    #[test]
    fn test_progress_repeats() {
        let t = ParticleTiming::new(4.0, 1.0);
        assert_eq!(t.progress_at(0.5), None);
        assert_eq!(t.progress_at(1.0), Some(0.0));
        assert_eq!(t.progress_at(3.0), Some(0.5));
        assert_eq!(t.progress_at(7.0), Some(0.5));
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let config = StaggerConfig::default();
        let a = ParticleSchedule::generate(5, &config, &mut StdRng::seed_from_u64(42));
        let b = ParticleSchedule::generate(5, &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
