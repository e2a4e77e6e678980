//! Looping Two-Leg Animations
//!
//! Decorative loops such as "breathe from 1.0 up to 1.05 and back" or
//! "bounce up 10 cells and fall back". Each cycle is a rise leg followed
//! by a fall leg, repeated forever while running.

use std::time::Duration;

use super::easing::EasingFunction;

/// One leg of a pulse cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseLeg {
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl PulseLeg {
    pub const fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }
}

/// An infinitely repeating rest → peak → rest animation
#[derive(Clone, Debug)]
pub struct PulseLoop {
    rest: f32,
    peak: f32,
    rise: PulseLeg,
    fall: PulseLeg,
    /// Time into the current cycle
    phase: Duration,
    running: bool,
}

impl PulseLoop {
    pub fn new(rest: f32, peak: f32, rise: PulseLeg, fall: PulseLeg) -> Self {
        Self {
            rest,
            peak,
            rise,
            fall,
            phase: Duration::ZERO,
            running: false,
        }
    }

    /// Symmetric ease-in-out pulse
    pub fn symmetric(rest: f32, peak: f32, half_period: Duration) -> Self {
        let leg = PulseLeg::new(half_period, EasingFunction::EaseInOut);
        Self::new(rest, peak, leg, leg)
    }

    fn period(&self) -> Duration {
        self.rise.duration + self.fall.duration
    }

    pub fn start(&mut self) {
        self.phase = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn advance(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        let period = self.period();
        if period.is_zero() {
            return;
        }
        let nanos = (self.phase + delta).as_nanos() % period.as_nanos();
        self.phase = Duration::from_nanos(nanos as u64);
    }

    /// Current value between `rest` and `peak`
    pub fn value(&self) -> f32 {
        let span = self.peak - self.rest;
        if self.phase < self.rise.duration {
            let t = fraction(self.phase, self.rise.duration);
            self.rest + span * self.rise.easing.apply(t)
        } else {
            let t = fraction(self.phase - self.rise.duration, self.fall.duration);
            self.peak - span * self.fall.easing.apply(t)
        }
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
    }
}
