//! App Stage Sequencer
//!
//! The app moves through three stages, strictly forward:
//! splash → welcome → main. The splash advances on its own once its
//! animation finishes; the welcome screen advances only when the user
//! opens the gift. Main is terminal.

use serde::{Deserialize, Serialize};

/// Top-level app stage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppStage {
    #[default]
    Splash,
    Welcome,
    Main,
}

impl AppStage {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Welcome => "welcome",
            Self::Main => "main",
        }
    }
}

/// Forward-only stage sequencer
#[derive(Debug, Default)]
pub struct StageSequencer {
    stage: AppStage,
}

impl StageSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> AppStage {
        self.stage
    }

    /// Splash finished. Returns whether the stage changed.
    pub fn splash_completed(&mut self) -> bool {
        self.transition(AppStage::Splash, AppStage::Welcome)
    }

    /// User opened the gift. Returns whether the stage changed.
    pub fn open_gift(&mut self) -> bool {
        self.transition(AppStage::Welcome, AppStage::Main)
    }

    fn transition(&mut self, from: AppStage, to: AppStage) -> bool {
        if self.stage != from {
            tracing::debug!(
                current = self.stage.description(),
                requested = to.description(),
                "Ignoring stage transition"
            );
            return false;
        }
        self.stage = to;
        tracing::info!(stage = to.description(), "Stage changed");
        true
    }
}
