use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};
use unicode_width::UnicodeWidthStr;

use card_core::content::WelcomeContent;
use card_core::screens::WelcomeController;

use super::{fill, stack};
use crate::art::{Gallery, PORTRAIT};
use crate::theme::{fade, BLUSH, CARNATION, COCOA, CREAM, HEART, ROSE};
use crate::widgets::TextBlock;

/// Rows the content rises through during the entrance
const RISE_ROWS: f32 = 3.0;

pub fn render_welcome(
    buf: &mut Buffer,
    area: Rect,
    welcome: &WelcomeController,
    content: &WelcomeContent,
    gallery: &Gallery,
) {
    fill(buf, area, BLUSH);

    if !welcome.is_ready() {
        return;
    }

    let opacity = welcome.entrance();
    let rise = welcome.rise_offset(RISE_ROWS).round() as u16;

    let width = area.width.saturating_sub(4).min(52);
    let inner = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + rise,
        width,
        area.height.saturating_sub(rise),
    );

    let title = TextBlock::new(&content.title, COCOA, BLUSH).opacity(opacity);
    let subtitle = TextBlock::new(&content.subtitle, COCOA, BLUSH).opacity(opacity * 0.8);
    let portrait = gallery.named(PORTRAIT);

    let rows = stack(
        inner,
        &[
            portrait.height + 2,
            1,
            title.height(width),
            1,
            subtitle.height(width),
            1,
            3,
        ],
    );

    // Photo frame thickens on the pulse peak
    let frame = if welcome.pulse() > 1.025 {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let photo_block = Block::bordered()
        .border_type(frame)
        .border_style(Style::default().fg(fade(ROSE, BLUSH, opacity)).bg(BLUSH));
    let photo = photo_block.inner(rows[0]);
    photo_block.render(rows[0], buf);
    portrait.render(buf, photo, opacity, BLUSH);

    title.render(rows[2], buf);
    render_name_line(buf, rows[3], &content.name, welcome, opacity);
    subtitle.render(rows[4], buf);
    render_button(buf, rows[6], &content.button_text, welcome, opacity);
}

/// Name with a beating heart on each side
fn render_name_line(
    buf: &mut Buffer,
    area: Rect,
    name: &str,
    welcome: &WelcomeController,
    opacity: f32,
) {
    if area.height == 0 {
        return;
    }
    // 1.0 at rest, 1.1 at the top of a beat
    let beat = ((welcome.heart() - 1.0) / 0.1).clamp(0.0, 1.0);
    let heart = if beat > 0.5 { "♥" } else { "♡" };
    let line = format!("{heart} {name} {heart}");

    let width = (line.width() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let style = Style::default()
        .fg(fade(CARNATION, BLUSH, opacity))
        .bg(BLUSH)
        .add_modifier(Modifier::BOLD);
    buf.set_stringn(x, area.y, &line, area.width as usize, style);

    let heart_style = Style::default()
        .fg(fade(HEART, BLUSH, opacity * (0.6 + 0.4 * beat)))
        .bg(BLUSH);
    buf.set_stringn(x, area.y, heart, 1, heart_style);
}

/// Pill button whose width follows the press spring
fn render_button(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    welcome: &WelcomeController,
    opacity: f32,
) {
    if area.height < 3 {
        return;
    }
    let base = label.width() as f32 + 8.0;
    let width = ((base * welcome.button_scale()).round() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let rect = Rect::new(x, area.y, width, 3);

    let fill_color = if welcome.is_pressed() { CARNATION } else { ROSE };
    let fill_color = fade(fill_color, BLUSH, opacity);

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fill_color).bg(BLUSH))
        .style(Style::default().bg(fill_color))
        .render(rect, buf);

    TextBlock::new(label, CREAM, fill_color)
        .opacity(opacity)
        .bold()
        .render(Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), 1), buf);
}
