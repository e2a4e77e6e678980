//! Screen Rendering
//!
//! Stateless drawing for each screen. Everything animated is read from
//! the core controllers; nothing here owns time.

mod home;
mod memories;
mod splash;
mod tab_bar;
mod welcome;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

pub use home::{render_confetti, render_home};
pub use memories::render_memories;
pub use splash::render_splash;
pub use tab_bar::{render_tab_bar, tab_at, TAB_BAR_HEIGHT};
pub use welcome::render_welcome;

/// Paint the whole area in one background color
pub(crate) fn fill(buf: &mut Buffer, area: Rect, bg: Color) {
    buf.set_style(area, Style::default().bg(bg));
}

/// Rows for a stack of blocks, centered vertically, clipped to `area`
pub(crate) fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let total: u16 = heights.iter().sum();
    let mut y = area.y + area.height.saturating_sub(total) / 2;
    let bottom = area.y + area.height;

    heights
        .iter()
        .map(|&h| {
            let h = h.min(bottom.saturating_sub(y));
            let rect = Rect::new(area.x, y, area.width, h);
            y += h;
            rect
        })
        .collect()
}
