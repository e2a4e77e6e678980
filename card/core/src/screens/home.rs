//! Home Tab Controller
//!
//! Three content blocks fade in one after another when the tab is first
//! shown, and a confetti burst fires at the same time. Each time the tab
//! gains focus it asks for background music.

use std::time::Duration;

use rand::Rng;

use crate::animation::{EasingFunction, Stagger, StaggerStep};

use super::confetti::{Confetti, ConfettiPiece, ConfettiSettings};

const FADE: Duration = Duration::from_millis(600);
const GAP: Duration = Duration::from_millis(200);

/// Content blocks, in reveal order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeBlock {
    Header = 0,
    Image = 1,
    Note = 2,
}

/// Requests raised by the home tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeEvent {
    PlayMusic,
}

pub struct HomeController {
    reveal: Stagger,
    confetti: Confetti,
    mounted: bool,
    focused: bool,
}

impl HomeController {
    pub fn new() -> Self {
        Self::with_confetti(ConfettiSettings::default())
    }

    pub fn with_confetti(settings: ConfettiSettings) -> Self {
        Self {
            reveal: Stagger::new(
                &[
                    StaggerStep::new(Duration::ZERO, FADE),
                    StaggerStep::new(GAP, FADE),
                    StaggerStep::new(GAP, FADE),
                ],
                EasingFunction::Linear,
            ),
            confetti: Confetti::new(settings),
            mounted: false,
            focused: false,
        }
    }

    /// First display. Later calls do nothing.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.reveal.start();
        self.confetti.fire(rng);
    }

    /// Tab focus changed. Gaining focus requests music.
    pub fn set_focus(&mut self, focused: bool) -> Option<HomeEvent> {
        if self.focused == focused {
            return None;
        }
        self.focused = focused;
        focused.then_some(HomeEvent::PlayMusic)
    }

    pub fn update(&mut self, delta: Duration) {
        self.reveal.advance(delta);
        self.confetti.advance(delta);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Opacity of a block (0.0 to 1.0)
    pub fn reveal(&self, block: HomeBlock) -> f32 {
        if !self.mounted {
            return 0.0;
        }
        self.reveal.value(block as usize)
    }

    pub fn confetti(&self) -> Vec<ConfettiPiece> {
        self.confetti.pieces()
    }

    pub fn is_confetti_active(&self) -> bool {
        self.confetti.is_active()
    }
}

impl Default for HomeController {
    fn default() -> Self {
        Self::new()
    }
}
