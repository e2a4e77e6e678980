//! Screen controllers
//!
//! Headless state for every screen: animation values, readiness gating
//! and the events each screen raises. Surfaces read values from these
//! and forward input to them.

pub mod confetti;
pub mod home;
pub mod splash;
pub mod welcome;

pub use confetti::{Confetti, ConfettiPiece, ConfettiSettings, CONFETTI_PALETTE};
pub use home::{HomeBlock, HomeController, HomeEvent};
pub use splash::{SplashController, SplashEvent, SPLASH_DURATION};
pub use welcome::{WelcomeController, WelcomeEvent, ENTRANCE_DURATION};
