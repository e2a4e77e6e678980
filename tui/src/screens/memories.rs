use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Gauge, Widget};

use card_core::{Carousel, Slide};

use super::fill;
use crate::art::Gallery;
use crate::carousel_view::CarouselView;
use crate::theme::{CAPTION, NIGHT, ROSE, TRACK};
use crate::widgets::TextBlock;

/// Rows reserved under the picture for the caption
const CAPTION_ROWS: u16 = 4;

pub fn render_memories(
    buf: &mut Buffer,
    area: Rect,
    carousel: &Carousel,
    view: &CarouselView,
    gallery: &Gallery,
) {
    fill(buf, area, NIGHT);
    if area.height < 3 || area.width == 0 {
        return;
    }

    // Pages slide under the progress bar
    let pages = Rect::new(area.x, area.y + 1, area.width, area.height - 2);
    let (left, right, shift) = view.visible_pages();
    let shift_cols = (shift * f32::from(pages.width)).round() as u16;

    if let Some(slide) = carousel.slides().get(left) {
        blit_page(buf, pages, slide, gallery, -(i32::from(shift_cols)));
    }
    if right != left && shift_cols > 0 {
        if let Some(slide) = carousel.slides().get(right) {
            blit_page(buf, pages, slide, gallery, i32::from(pages.width - shift_cols));
        }
    }

    Gauge::default()
        .gauge_style(Style::default().fg(ROSE).bg(TRACK))
        .label("")
        .ratio(f64::from(carousel.progress()).clamp(0.0, 1.0))
        .render(Rect::new(area.x, area.y, area.width, 1), buf);

    render_dots(
        buf,
        Rect::new(area.x, area.y + area.height - 1, area.width, 1),
        carousel.slides().canonical_len(),
        carousel.position(),
    );
}

/// Render one page off-screen, then copy it in shifted by `dx` columns
fn blit_page(buf: &mut Buffer, area: Rect, slide: &Slide, gallery: &Gallery, dx: i32) {
    let local = Rect::new(0, 0, area.width, area.height);
    let mut page = Buffer::empty(local);
    render_page(&mut page, local, slide, gallery);

    for y in 0..area.height {
        for x in 0..area.width {
            let dst_x = i32::from(area.x) + i32::from(x) + dx;
            if dst_x < i32::from(area.x) || dst_x >= i32::from(area.x + area.width) {
                continue;
            }
            if let (Some(src), Some(dst)) = (
                page.cell((x, y)),
                buf.cell_mut((dst_x as u16, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

fn render_page(buf: &mut Buffer, area: Rect, slide: &Slide, gallery: &Gallery) {
    fill(buf, area, NIGHT);

    let caption_rows = CAPTION_ROWS.min(area.height);
    let picture = Rect::new(area.x, area.y, area.width, area.height - caption_rows);
    gallery.image(&slide.image).render(buf, picture, 1.0, NIGHT);

    let caption = Rect::new(
        area.x + 2,
        area.y + picture.height,
        area.width.saturating_sub(4),
        caption_rows,
    );
    TextBlock::new(&slide.caption, CAPTION, NIGHT)
        .bold()
        .render(caption, buf);
}

fn render_dots(buf: &mut Buffer, area: Rect, count: usize, position: usize) {
    let dots: String = (0..count)
        .map(|i| if i == position { "● " } else { "○ " })
        .collect();
    let dots = dots.trim_end();
    let width = (dots.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    buf.set_stringn(
        x,
        area.y,
        dots,
        area.width as usize,
        Style::default().fg(ROSE).bg(NIGHT).add_modifier(Modifier::BOLD),
    );
}
