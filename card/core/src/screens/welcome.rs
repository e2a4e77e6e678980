//! Welcome Controller
//!
//! Entrance fade, two decorative loops (photo pulse, heart beat) and the
//! "open gift" button with spring press feedback. Opening the gift is the
//! only way forward.

use std::time::Duration;

use crate::animation::{
    CubicBezier, EasingFunction, PulseLeg, PulseLoop, Spring, Timing, DEFAULT_FRICTION,
};

/// Entrance fade length
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(1200);

/// Button scale while held
pub const PRESSED_SCALE: f32 = 0.96;

/// Button scale overshoot on release
pub const RELEASED_SCALE: f32 = 1.03;

/// Release spring tension
const RELEASE_TENSION: f32 = 100.0;

/// Events reported by the welcome screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeEvent {
    OpenGift,
}

pub struct WelcomeController {
    ready: bool,
    entrance: Timing,
    pulse: PulseLoop,
    heart: PulseLoop,
    button: Spring,
    pressed: bool,
}

impl WelcomeController {
    pub fn new() -> Self {
        Self {
            ready: false,
            entrance: Timing::new(
                ENTRANCE_DURATION,
                EasingFunction::Bezier(CubicBezier::ENTRANCE),
            ),
            pulse: PulseLoop::symmetric(1.0, 1.05, Duration::from_millis(1500)),
            heart: PulseLoop::new(
                1.0,
                1.1,
                PulseLeg::new(Duration::from_millis(500), EasingFunction::EaseInOut),
                PulseLeg::new(Duration::from_millis(1500), EasingFunction::EaseInOut),
            ),
            button: Spring::new(1.0),
            pressed: false,
        }
    }

    pub fn set_assets_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        self.entrance.start();
        self.pulse.start();
        self.heart.start();
    }

    pub fn update(&mut self, delta: Duration) {
        self.entrance.advance(delta);
        self.pulse.advance(delta);
        self.heart.advance(delta);
        self.button.advance(delta);
    }

    /// Finger (or key) down on the button
    pub fn press_in(&mut self) {
        if !self.ready {
            return;
        }
        self.pressed = true;
        self.button.set_target(PRESSED_SCALE);
    }

    /// Finger (or key) released
    pub fn press_out(&mut self) {
        if !self.ready {
            return;
        }
        self.pressed = false;
        self.button
            .set_target_with(RELEASED_SCALE, RELEASE_TENSION, DEFAULT_FRICTION);
    }

    /// Button activated. Ignored until the screen is shown.
    pub fn activate(&mut self) -> Option<WelcomeEvent> {
        if !self.ready {
            return None;
        }
        tracing::debug!("Gift opened");
        Some(WelcomeEvent::OpenGift)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Entrance progress (0.0 hidden, 1.0 in place)
    pub fn entrance(&self) -> f32 {
        self.entrance.value()
    }

    /// Vertical offset of the content during the entrance, in `max` units
    pub fn rise_offset(&self, max: f32) -> f32 {
        max * (1.0 - self.entrance())
    }

    pub fn pulse(&self) -> f32 {
        self.pulse.value()
    }

    pub fn heart(&self) -> f32 {
        self.heart.value()
    }

    pub fn button_scale(&self) -> f32 {
        self.button.value()
    }
}

impl Default for WelcomeController {
    fn default() -> Self {
        Self::new()
    }
}
