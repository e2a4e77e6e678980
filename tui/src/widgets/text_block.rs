//! TextBlock Widget
//!
//! A borderless block of wrapped, centered text that can be faded toward
//! the background color during entrances.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::theme::fade;

pub struct TextBlock<'a> {
    content: &'a str,
    fg: Color,
    bg: Color,
    opacity: f32,
    bold: bool,
}

impl<'a> TextBlock<'a> {
    pub fn new(content: &'a str, fg: Color, bg: Color) -> Self {
        Self {
            content,
            fg,
            bg,
            opacity: 1.0,
            bold: false,
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Wrapped lines for a given width
    pub fn lines(&self, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        self.content
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width as usize)
                        .into_iter()
                        .map(|cow| cow.into_owned())
                        .collect()
                }
            })
            .collect()
    }

    /// Rows needed at `width`
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width).len() as u16
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.opacity <= 0.0 {
            return;
        }

        let mut style = Style::default()
            .fg(fade(self.fg, self.bg, self.opacity))
            .bg(self.bg);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        for (i, line) in self
            .lines(area.width)
            .iter()
            .take(area.height as usize)
            .enumerate()
        {
            let width = (line.width() as u16).min(area.width);
            let x = area.x + (area.width - width) / 2;
            buf.set_stringn(x, area.y + i as u16, line, area.width as usize, style);
        }
    }
}
