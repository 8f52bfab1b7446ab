//! Flow-particle progress along the summary arrows.

use crate::options::AnimationOptions;

/// Shortest step interval in seconds; shorter ones are raised to this.
pub const MIN_INTERVAL: f32 = 0.001;

/// Fixed-rate stepper for the particles that travel along flow arrows.
///
/// Progress moves in equal steps (0.02 by default) once per interval
/// (50 ms by default, about 20 steps per second). After the step that
/// lands exactly on 1.0 the next step wraps to 0. Pausing resets progress
/// to 0 rather than freezing it.
///
/// The stepper is fed frame deltas from the visualization's
/// [`AnimationClock`](super::AnimationClock) and converts them into whole
/// steps, so the cadence is independent of the frame rate.
#[derive(Debug, Clone)]
pub struct ParticleTimer {
    steps: u32,
    steps_per_cycle: u32,
    /// Seconds per step.
    interval: f32,
    /// Unconsumed time since the last step.
    accumulator: f32,
    running: bool,
}

impl ParticleTimer {
    /// Timer advancing by `step` every `interval` seconds. A step that does
    /// not divide 1 evenly is rounded to the nearest whole number of steps
    /// per cycle. Intervals below [`MIN_INTERVAL`] are raised to it.
    #[must_use]
    pub fn new(step: f32, interval: f32, running: bool) -> Self {
        let steps_per_cycle = if step.is_finite() && step > 0.0 {
            (1.0 / step).round().max(1.0) as u32
        } else {
            1
        };
        Self {
            steps: 0,
            steps_per_cycle,
            interval: interval.max(MIN_INTERVAL),
            accumulator: 0.0,
            running,
        }
    }

    /// Timer configured from animation options.
    #[must_use]
    pub fn from_options(opts: &AnimationOptions, running: bool) -> Self {
        Self::new(
            opts.particle_step,
            opts.particle_interval_ms as f32 / 1000.0,
            running,
        )
    }

    /// Feed a frame delta; returns how many steps were taken.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !self.running || !delta.is_finite() || delta <= 0.0 {
            return 0;
        }
        self.accumulator += delta;
        let mut taken = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            self.step();
            taken += 1;
        }
        taken
    }

    /// Take one step, wrapping to 0 after the cycle's final position.
    pub fn step(&mut self) {
        if self.steps >= self.steps_per_cycle {
            self.steps = 0;
        } else {
            self.steps += 1;
        }
    }

    /// Start or pause. Pausing resets progress to 0.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
        if !running {
            self.steps = 0;
            self.accumulator = 0.0;
        }
    }

    /// Whether the timer is advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Normalized position along the arrow, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.steps as f32 / self.steps_per_cycle as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_timer() -> ParticleTimer {
        ParticleTimer::from_options(&AnimationOptions::default(), true)
    }

    #[test]
    fn reaches_one_after_fifty_steps_then_wraps() {
        let mut timer = default_timer();
        assert_eq!(timer.progress(), 0.0);
        for _ in 0..50 {
            timer.step();
        }
        assert_eq!(timer.progress(), 1.0);
        timer.step();
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn each_step_adds_the_configured_increment() {
        let mut timer = default_timer();
        let mut prev = timer.progress();
        for _ in 0..49 {
            timer.step();
            let next = timer.progress();
            assert!((next - prev - 0.02).abs() < 1e-5);
            assert!((0.0..=1.0).contains(&next));
            prev = next;
        }
    }

    #[test]
    fn cadence_is_twenty_steps_per_second() {
        let mut timer = default_timer();
        let mut taken = 0;
        for _ in 0..60 {
            taken += timer.advance(1.0 / 60.0);
        }
        assert!((19..=20).contains(&taken), "took {taken} steps");
    }

    #[test]
    fn pausing_resets_instead_of_freezing() {
        let mut timer = default_timer();
        let _ = timer.advance(0.5);
        assert!(timer.progress() > 0.0);
        timer.set_running(false);
        assert_eq!(timer.progress(), 0.0);
        assert_eq!(timer.advance(1.0), 0);
        assert_eq!(timer.progress(), 0.0);
        timer.set_running(true);
        let _ = timer.advance(0.05);
        assert!((timer.progress() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn zero_interval_is_bounded() {
        let mut opts = AnimationOptions::default();
        opts.particle_interval_ms = 0;
        let mut timer = ParticleTimer::from_options(&opts, true);
        let taken = timer.advance(0.25);
        assert!((249..=250).contains(&taken), "took {taken} steps");
        assert!((0.0..=1.0).contains(&timer.progress()));
    }

    #[test]
    fn degenerate_step_still_cycles() {
        let mut timer = ParticleTimer::new(0.0, 0.05, true);
        timer.step();
        assert_eq!(timer.progress(), 1.0);
        timer.step();
        assert_eq!(timer.progress(), 0.0);
    }
}
