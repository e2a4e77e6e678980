//! Birthday Card TUI - Terminal rendering of the card
//!
//! A full-screen terminal birthday card: a splash, a welcome screen with
//! an "open your gift" button, then a two-tab main area with a confetti
//! greeting and an auto-advancing memories carousel.
//!
//! # Architecture
//!
//! All behavior lives in `card-core`; this crate only draws it and feeds
//! it terminal input.
//!
//! - **Compositor**: Layered rendering (scene, confetti overlay, tab bar)
//! - **Art**: Blocky sprites drawn with Unicode block elements
//! - **Screens**: One renderer per stage or tab
//! - **CarouselView**: The scrollable surface the carousel drives
//! - **Audio**: rodio playback behind the `audio` feature

pub mod app;
pub mod art;
pub mod audio;
pub mod carousel_view;
pub mod compositor;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::App;
