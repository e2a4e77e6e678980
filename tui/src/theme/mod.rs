//! Theme and Colors
//!
//! The card's blush-and-rose palette, plus helpers for fading colors
//! toward the background (terminal cells have no alpha).

use ratatui::style::Color;

use card_core::screens::CONFETTI_PALETTE;

// ============================================================================
// Card Palette
// ============================================================================

/// Page background - pale blush
pub const BLUSH: Color = Color::Rgb(0xFF, 0xE0, 0xE7);

/// Buttons, progress fill, accents
pub const ROSE: Color = Color::Rgb(0xFF, 0x8F, 0xA3);

/// Body text - dark cocoa
pub const COCOA: Color = Color::Rgb(0x61, 0x31, 0x3C);

/// Name and headline highlight
pub const CARNATION: Color = Color::Rgb(0xFC, 0x8E, 0xAC);

/// Hearts
pub const HEART: Color = Color::Rgb(0xFF, 0x4D, 0x6D);

/// Badges and cards
pub const CREAM: Color = Color::Rgb(0xFF, 0xF5, 0xF7);

/// Empty part of a progress track
pub const TRACK: Color = Color::Rgb(0xF5, 0xC2, 0xCD);

/// Memories background
pub const NIGHT: Color = Color::Rgb(0x10, 0x08, 0x0A);

/// Caption text on photos
pub const CAPTION: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

// ============================================================================
// Helpers
// ============================================================================

/// Confetti color for a palette index
pub fn confetti_color(index: usize) -> Color {
    let (r, g, b) = CONFETTI_PALETTE[index % CONFETTI_PALETTE.len()];
    Color::Rgb(r, g, b)
}

/// Mix `color` toward `background` (opacity 1.0 keeps `color`)
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let t = opacity.clamp(0.0, 1.0);
            let mix = |c: u8, base: u8| -> u8 {
                (f32::from(base) + (f32::from(c) - f32::from(base)) * t).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        // Named colors can't be blended
        _ if opacity < 0.5 => background,
        _ => color,
    }
}
