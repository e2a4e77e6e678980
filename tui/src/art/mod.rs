//! Pixel Art
//!
//! Sprites and the gallery of bundled pictures.

mod gallery;
mod sprites;

pub use gallery::{Gallery, HEART_ICON, PORTRAIT};
pub use sprites::{build_sprite, ColoredCell, Sprite};
