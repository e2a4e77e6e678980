//! Timed Interpolation
//!
//! A value that travels from `from` to `to` over a fixed duration. Time is
//! pushed in by the caller (`advance(delta)`) rather than read from a
//! clock, so every controller built on top of it is deterministic.

use std::time::Duration;

use super::easing::EasingFunction;

/// How a timing run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingOutcome {
    /// Ran to completion. `overshoot` is the part of the last delta that
    /// fell past the end, so callers can carry it into the next phase.
    Finished { overshoot: Duration },
    /// Stopped early by [`Timing::stop`]
    Stopped,
}

impl TimingOutcome {
    /// Whether the run completed naturally
    pub fn finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// A single interpolation run
#[derive(Clone, Debug)]
pub struct Timing {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
    running: bool,
}

impl Timing {
    /// A 0 → 1 timing
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self::between(0.0, 1.0, duration, easing)
    }

    /// A `from` → `to` timing
    pub fn between(from: f32, to: f32, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
            running: false,
        }
    }

    /// Rewind to the start and begin running
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Rewind to the start without running
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Stop where we are. Returns `Stopped` if the timing was running.
    pub fn stop(&mut self) -> Option<TimingOutcome> {
        if self.running {
            self.running = false;
            Some(TimingOutcome::Stopped)
        } else {
            None
        }
    }

    /// Advance time. Returns an outcome only on the tick that finishes.
    pub fn advance(&mut self, delta: Duration) -> Option<TimingOutcome> {
        if !self.running {
            return None;
        }

        self.elapsed += delta;
        if self.elapsed >= self.duration {
            let overshoot = self.elapsed - self.duration;
            self.elapsed = self.duration;
            self.running = false;
            return Some(TimingOutcome::Finished { overshoot });
        }

        None
    }

    /// Linear fraction of the duration elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.elapsed.is_zero() && self.running {
                0.0
            } else {
                1.0
            };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the full duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left until completion
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_not_running_until_started() {
        let mut t = Timing::new(ms(100), EasingFunction::Linear);
        assert!(!t.is_running());
        assert_eq!(t.advance(ms(500)), None);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_runs_to_completion_with_overshoot() {
        let mut t = Timing::new(ms(100), EasingFunction::Linear);
        t.start();
        assert_eq!(t.advance(ms(60)), None);
        assert!((t.value() - 0.6).abs() < 1e-4);
        assert_eq!(
            t.advance(ms(70)),
            Some(TimingOutcome::Finished { overshoot: ms(30) })
        );
        assert!(!t.is_running());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut t = Timing::new(ms(1000), EasingFunction::Linear);
        t.start();
        t.advance(ms(250));
        assert_eq!(t.stop(), Some(TimingOutcome::Stopped));
        assert_eq!(t.stop(), None);
        t.advance(ms(500));
        assert!((t.progress() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_between_interpolates_range() {
        let mut t = Timing::between(1.0, 1.05, ms(100), EasingFunction::Linear);
        t.start();
        t.advance(ms(50));
        assert!((t.value() - 1.025).abs() < 1e-4);
    }

    #[test]
    fn test_restart_rewinds() {
        let mut t = Timing::new(ms(100), EasingFunction::Linear);
        t.start();
        t.advance(ms(100));
        t.start();
        assert_eq!(t.progress(), 0.0);
        assert!(t.is_running());
        assert_eq!(t.remaining(), ms(100));
    }
}
