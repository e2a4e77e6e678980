//! Staggered Entrance
//!
//! A fixed sequence of fades, each optionally preceded by a delay. Track
//! `i` only starts once track `i - 1` (and the delay before `i`) is done.

use std::time::Duration;

use super::easing::EasingFunction;

/// One fade in a stagger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerStep {
    /// Pause before this step starts
    pub delay: Duration,
    /// Fade duration
    pub duration: Duration,
}

impl StaggerStep {
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }
}

#[derive(Clone, Debug)]
struct Track {
    start: Duration,
    duration: Duration,
}

/// A one-shot staggered sequence
#[derive(Clone, Debug)]
pub struct Stagger {
    tracks: Vec<Track>,
    elapsed: Duration,
    easing: EasingFunction,
    running: bool,
}

impl Stagger {
    pub fn new(steps: &[StaggerStep], easing: EasingFunction) -> Self {
        let mut cursor = Duration::ZERO;
        let tracks = steps
            .iter()
            .map(|step| {
                let start = cursor + step.delay;
                cursor = start + step.duration;
                Track {
                    start,
                    duration: step.duration,
                }
            })
            .collect();

        Self {
            tracks,
            elapsed: Duration::ZERO,
            easing,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn advance(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        self.elapsed += delta;
        if self.is_complete() {
            self.running = false;
        }
    }

    /// Eased value (0.0 to 1.0) of a track; unknown tracks read as fully shown
    pub fn value(&self, track: usize) -> f32 {
        let Some(t) = self.tracks.get(track) else {
            return 1.0;
        };
        if self.elapsed <= t.start {
            return 0.0;
        }
        if t.duration.is_zero() {
            return 1.0;
        }
        let local = (self.elapsed - t.start).as_secs_f32() / t.duration.as_secs_f32();
        self.easing.apply(local.min(1.0))
    }

    /// Total length of the sequence
    pub fn total_duration(&self) -> Duration {
        self.tracks
            .last()
            .map_or(Duration::ZERO, |t| t.start + t.duration)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
