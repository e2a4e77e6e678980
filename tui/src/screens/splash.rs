use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, LineGauge, Widget};

use card_core::content::SplashContent;
use card_core::screens::SplashController;

use super::{fill, stack};
use crate::art::{Gallery, HEART_ICON, PORTRAIT};
use crate::theme::{fade, BLUSH, COCOA, ROSE, TRACK};
use crate::widgets::TextBlock;

/// How far the heart lifts at the top of its bounce
const BOUNCE_ROWS: f32 = 2.0;

pub fn render_splash(
    buf: &mut Buffer,
    area: Rect,
    splash: &SplashController,
    content: &SplashContent,
    gallery: &Gallery,
) {
    fill(buf, area, BLUSH);

    // Nothing but the background until assets are in
    if !splash.is_ready() {
        return;
    }

    let width = area.width.saturating_sub(4).min(48);
    let inner = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let title = TextBlock::new(&content.title, COCOA, BLUSH).bold();
    let subtitle = TextBlock::new(&content.subtitle, ROSE, BLUSH);
    let portrait = gallery.named(PORTRAIT);
    let portrait_h = (area.height / 2).max(portrait.height + 2).min(16);

    let rows = stack(
        inner,
        &[
            3,
            portrait_h,
            1,
            title.height(width),
            subtitle.height(width),
            1,
            1,
        ],
    );

    // Heart bounce
    let lift = (splash.bounce() * BOUNCE_ROWS).round() as u16;
    let heart_area = Rect {
        y: rows[0].y.saturating_sub(lift).max(area.y),
        ..rows[0]
    };
    gallery
        .named(HEART_ICON)
        .render_scaled(buf, heart_area, 1, 1.0, BLUSH);

    // Photo, with a halo that breathes with the pulse
    let halo = ((splash.pulse() - 1.0) / 0.05).clamp(0.0, 1.0);
    let halo_style = Style::default().fg(fade(ROSE, BLUSH, halo)).bg(BLUSH);
    let halo_block = Block::bordered().border_style(halo_style);
    let photo = halo_block.inner(rows[1]);
    halo_block.render(rows[1], buf);
    portrait.render(buf, photo, 1.0, BLUSH);

    title.render(rows[3], buf);
    subtitle.render(rows[4], buf);

    LineGauge::default()
        .filled_style(Style::default().fg(ROSE).bg(BLUSH))
        .unfilled_style(Style::default().fg(TRACK).bg(BLUSH))
        .label("")
        .ratio(f64::from(splash.progress()).clamp(0.0, 1.0))
        .render(rows[6], buf);
}
