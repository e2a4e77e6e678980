//! Card Core - Headless Logic for the Birthday Card
//!
//! Everything the card does, independent of how it is drawn: content,
//! stage sequencing, screen animations, the memories carousel and the
//! background music. The terminal surface in `card-tui` is a thin client
//! that forwards input and time and renders what it reads back.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      UI Surface                           │
//! │   ┌──────────────────────┐   ┌─────────────────────────┐  │
//! │   │  TUI (ratatui)       │   │  Headless tests         │  │
//! │   └──────────┬───────────┘   └────────────┬────────────┘  │
//! │              │ input, time, DisplayHost   │               │
//! └──────────────┼────────────────────────────┼───────────────┘
//!                │                            │
//! ┌──────────────┼────────────────────────────┼───────────────┐
//! │              ▼          CARD CORE         ▼               │
//! │   ┌──────────────────────────────────────────────────┐    │
//! │   │                     Shell                        │    │
//! │   │  ┌────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐  │    │
//! │   │  │ Stage  │ │ Screens │ │ Tabs + │ │  Music + │  │    │
//! │   │  │ Seq.   │ │         │ │Carousel│ │ Lifecycle│  │    │
//! │   │  └────────┘ └─────────┘ └────────┘ └──────────┘  │    │
//! │   └──────────────────────────────────────────────────┘    │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`animation`]: timing, easing, loops, springs and staggers
//! - [`audio`]: background music controller and the backend seam
//! - [`carousel`]: auto-advancing looping slideshow state machine
//! - [`config`]: optional TOML settings file
//! - [`content`]: bundled display text and image references
//! - [`lifecycle`]: foreground/background notifications
//! - [`screens`]: splash, welcome and home controllers
//! - [`shell`]: composition of all of the above
//! - [`slides`]: slide model and the looped sequence
//! - [`stage`]: splash → welcome → main sequencer
//! - [`tabs`]: Home and Memories tabs
//!
//! # No TUI Dependencies
//!
//! This crate has no dependency on ratatui, crossterm or any audio
//! library. Audio output is plugged in through [`audio::AudioBackend`].

pub mod animation;
pub mod audio;
pub mod carousel;
pub mod config;
pub mod content;
pub mod lifecycle;
pub mod screens;
pub mod shell;
pub mod slides;
pub mod stage;
pub mod tabs;

// Re-exports for convenience
pub use audio::{
    AudioBackend, AudioError, AudioPlayer, BackgroundMusic, MusicSettings, UnavailableBackend,
    DEFAULT_VOLUME,
};
pub use carousel::{
    Carousel, CarouselState, CarouselTiming, DisplayHost, LOOP_SETTLE_DELAY, SLIDE_DURATION,
};
pub use content::{AppContent, ContentError, ContentStore};
pub use lifecycle::{AppLifecycle, LifecycleObserver, LifecycleState};
pub use shell::{Shell, ShellEvent};
pub use slides::{ImageRef, LoopedSlides, Slide};
pub use stage::{AppStage, StageSequencer};
pub use tabs::{Tab, TabBar, TabChange};

// Config exports
pub use config::{
    default_config_path, default_music_path, load_config, load_config_from_path, CardConfig,
    CardToml, ConfigError, ConfigSource,
};
