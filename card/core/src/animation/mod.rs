//! Animation Primitives - Surface-Agnostic Timing
//!
//! Everything here is driven by explicit `advance(delta)` calls. Controllers
//! own their animations and surfaces only read the resulting values, so
//! the same logic can back a terminal, a GUI or a headless test.
//!
//! - [`Timing`]: one-shot interpolation with a finished/stopped outcome
//! - [`PulseLoop`]: decorative rest → peak → rest loops
//! - [`Spring`]: damped spring for press feedback
//! - [`Stagger`]: sequenced entrance fades

mod easing;
mod pulse;
mod spring;
mod stagger;
mod timing;

pub use easing::{CubicBezier, EasingFunction};
pub use pulse::{PulseLeg, PulseLoop};
pub use spring::{Spring, DEFAULT_FRICTION, DEFAULT_TENSION};
pub use stagger::{Stagger, StaggerStep};
pub use timing::{Timing, TimingOutcome};
