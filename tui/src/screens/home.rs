use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Widget};

use card_core::content::HomeContent;
use card_core::screens::{ConfettiPiece, HomeBlock, HomeController};

use super::{fill, stack};
use crate::art::{Gallery, PORTRAIT};
use crate::theme::{confetti_color, fade, BLUSH, CARNATION, COCOA, CREAM, ROSE};
use crate::widgets::TextBlock;

pub fn render_home(
    buf: &mut Buffer,
    area: Rect,
    home: &HomeController,
    content: &HomeContent,
    gallery: &Gallery,
) {
    fill(buf, area, BLUSH);

    let width = area.width.saturating_sub(4).min(60);
    let inner = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let header = home.reveal(HomeBlock::Header);
    let image = home.reveal(HomeBlock::Image);
    let note = home.reveal(HomeBlock::Note);

    let note_text = note_body(content);
    let note_width = width.saturating_sub(4);
    let note_h = TextBlock::new(&note_text, COCOA, CREAM).height(note_width) + 4;
    let portrait = gallery.named(PORTRAIT);

    let rows = stack(inner, &[1, 1, 1, 1, portrait.height + 2, 1, note_h]);

    // Header
    TextBlock::new(&format!("✦ {} ✦", content.date_badge), ROSE, BLUSH)
        .opacity(header)
        .render(rows[0], buf);
    TextBlock::new(&content.greeting, COCOA, BLUSH)
        .opacity(header)
        .bold()
        .render(rows[1], buf);
    TextBlock::new(&content.name, CARNATION, BLUSH)
        .opacity(header)
        .bold()
        .render(rows[2], buf);

    // Image with its badge on the bottom border
    if image > 0.0 {
        let frame = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(fade(ROSE, BLUSH, image)).bg(BLUSH))
            .title_bottom(format!(" {} ", content.image_badge))
            .title_style(
                Style::default()
                    .fg(fade(COCOA, BLUSH, image))
                    .bg(BLUSH)
                    .add_modifier(Modifier::ITALIC),
            )
            .title_alignment(ratatui::layout::Alignment::Center);
        let photo_area = centered(rows[4], portrait.width * 2 + 4);
        let photo = frame.inner(photo_area);
        frame.render(photo_area, buf);
        portrait.render(buf, photo, image, BLUSH);
    }

    // Note card
    if note > 0.0 {
        let card_bg = fade(CREAM, BLUSH, note);
        let card = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(fade(ROSE, BLUSH, note)).bg(card_bg))
            .style(Style::default().bg(card_bg))
            .title(format!(" {} ", content.note_title))
            .title_style(
                Style::default()
                    .fg(fade(COCOA, BLUSH, note))
                    .add_modifier(Modifier::BOLD),
            )
            .padding(Padding::horizontal(1));
        let body = card.inner(rows[6]);
        card.render(rows[6], buf);
        TextBlock::new(&note_text, COCOA, card_bg)
            .opacity(note)
            .render(body, buf);
    }
}

/// Draw confetti over whatever is below
pub fn render_confetti(buf: &mut Buffer, area: Rect, pieces: &[ConfettiPiece]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for piece in pieces {
        if piece.y < 0.0 || piece.y >= 1.0 {
            continue;
        }
        let x = area.x + ((piece.x * f32::from(area.width - 1)).round() as u16);
        let y = area.y + ((piece.y * f32::from(area.height)) as u16).min(area.height - 1);
        let glyph = if piece.color % 2 == 0 { "▪" } else { "•" };
        let color = fade(confetti_color(piece.color), BLUSH, piece.opacity);
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph).set_fg(color);
        }
    }
}

fn note_body(content: &HomeContent) -> String {
    let mut body = content.note_lines.join("\n\n");
    body.push_str("\n\n");
    body.push_str(&content.note_footer);
    body.push('\n');
    body.push_str(&content.note_signature);
    body
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
