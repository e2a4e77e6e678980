//! Splash Controller
//!
//! Fixed-length entrance: a progress bar fills over four seconds while a
//! heart bounces and the photo breathes. Completion is reported exactly
//! once, when the progress bar is full.

use std::time::Duration;

use crate::animation::{EasingFunction, PulseLeg, PulseLoop, Timing, TimingOutcome};

/// Length of the splash
pub const SPLASH_DURATION: Duration = Duration::from_millis(4000);

/// Events reported by the splash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashEvent {
    Completed,
}

pub struct SplashController {
    ready: bool,
    completed: bool,
    progress: Timing,
    /// Heart bounce (0.0 rest, 1.0 top)
    bounce: PulseLoop,
    /// Photo scale
    pulse: PulseLoop,
}

impl SplashController {
    pub fn new() -> Self {
        Self {
            ready: false,
            completed: false,
            progress: Timing::new(SPLASH_DURATION, EasingFunction::EaseInOut),
            bounce: PulseLoop::new(
                0.0,
                1.0,
                PulseLeg::new(Duration::from_millis(1000), EasingFunction::EaseOut),
                PulseLeg::new(Duration::from_millis(1000), EasingFunction::EaseIn),
            ),
            pulse: PulseLoop::symmetric(1.0, 1.05, Duration::from_millis(1500)),
        }
    }

    /// Start the animations. Nothing runs before this.
    pub fn set_assets_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        self.progress.start();
        self.bounce.start();
        self.pulse.start();
    }

    pub fn update(&mut self, delta: Duration) -> Option<SplashEvent> {
        self.bounce.advance(delta);
        self.pulse.advance(delta);

        match self.progress.advance(delta) {
            Some(TimingOutcome::Finished { .. }) if !self.completed => {
                self.completed = true;
                tracing::debug!("Splash complete");
                Some(SplashEvent::Completed)
            }
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Progress bar fill (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Heart lift (0.0 to 1.0)
    pub fn bounce(&self) -> f32 {
        self.bounce.value()
    }

    /// Photo scale (1.0 to 1.05)
    pub fn pulse(&self) -> f32 {
        self.pulse.value()
    }
}

impl Default for SplashController {
    fn default() -> Self {
        Self::new()
    }
}
