//! Sprite Definitions
//!
//! Blocky pixel art using Unicode block elements. Each cell has its own
//! foreground color; spaces are transparent.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// A single colored cell in a sprite
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredCell {
    pub ch: char,
    pub fg: Color,
}

impl ColoredCell {
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }

    pub const fn empty() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

/// A still pixel-art image
#[derive(Clone, Debug)]
pub struct Sprite {
    /// Row-major cells
    cells: Vec<Vec<ColoredCell>>,
    pub width: u16,
    pub height: u16,
}

impl Sprite {
    pub fn new(cells: Vec<Vec<ColoredCell>>) -> Self {
        let height = cells.len() as u16;
        let width = cells.iter().map(|row| row.len() as u16).max().unwrap_or(0);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Cell at a position (empty if out of bounds)
    pub fn get(&self, x: u16, y: u16) -> ColoredCell {
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(ColoredCell::empty())
    }

    /// Largest whole-number scale that fits `area`, at least 1
    pub fn fit_scale(&self, area: Rect) -> u16 {
        if self.width == 0 || self.height == 0 {
            return 1;
        }
        // Terminal cells are about twice as tall as wide, so columns
        // scale twice as fast as rows
        let by_width = area.width / (self.width * 2);
        let by_height = area.height / self.height;
        by_width.min(by_height).max(1)
    }

    /// Draw centered in `area`, scaled to fit, tinted toward `fade_to` by
    /// `1.0 - opacity`
    pub fn render(&self, buf: &mut Buffer, area: Rect, opacity: f32, fade_to: Color) {
        let scale = self.fit_scale(area);
        self.render_scaled(buf, area, scale, opacity, fade_to);
    }

    pub fn render_scaled(
        &self,
        buf: &mut Buffer,
        area: Rect,
        scale: u16,
        opacity: f32,
        fade_to: Color,
    ) {
        let sx = scale * 2;
        let sy = scale;
        let draw_w = self.width * sx;
        let draw_h = self.height * sy;
        let origin_x = area.x + area.width.saturating_sub(draw_w) / 2;
        let origin_y = area.y + area.height.saturating_sub(draw_h) / 2;

        for y in 0..draw_h.min(area.height) {
            for x in 0..draw_w.min(area.width) {
                let cell = self.get(x / sx, y / sy);
                if cell.is_empty() {
                    continue;
                }
                let fg = crate::theme::fade(cell.fg, fade_to, opacity);
                let pos = (origin_x + x, origin_y + y);
                if let Some(target) = buf.cell_mut(pos) {
                    target.set_char(cell.ch).set_style(Style::default().fg(fg));
                }
            }
        }
    }
}

// ============================================================================
// Sprite Builder Helpers
// ============================================================================

/// Build a sprite from a pattern and a palette
///
/// Each pattern character is looked up in the palette as
/// `(key, glyph, color)`. Space is always transparent; unknown keys are
/// drawn as themselves.
///
/// ```ignore
/// let palette = [('R', '█', ROSE), ('w', '█', CREAM)];
/// let sprite = build_sprite(&[" RR ", "RwwR", " RR "], &palette);
/// ```
pub fn build_sprite(pattern: &[&str], palette: &[(char, char, Color)]) -> Sprite {
    let color_map: HashMap<char, (char, Color)> = palette
        .iter()
        .map(|&(key, ch, color)| (key, (ch, color)))
        .collect();

    let cells = pattern
        .iter()
        .map(|line| {
            line.chars()
                .map(|c| {
                    if c == ' ' {
                        ColoredCell::empty()
                    } else if let Some(&(ch, color)) = color_map.get(&c) {
                        ColoredCell::new(ch, color)
                    } else {
                        ColoredCell::new(c, Color::Reset)
                    }
                })
                .collect()
        })
        .collect();

    Sprite::new(cells)
}
