use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Tabs, Widget};

use card_core::Tab;

use super::fill;
use crate::theme::{COCOA, CREAM, ROSE, TRACK};

/// Rows taken by the tab bar
pub const TAB_BAR_HEIGHT: u16 = 3;

pub fn render_tab_bar(buf: &mut Buffer, area: Rect, selected: Tab) {
    fill(buf, area, CREAM);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_set(border::PLAIN)
        .border_style(Style::default().fg(TRACK).bg(CREAM));
    let inner = block.inner(area);
    block.render(area, buf);

    let titles = Tab::ALL.iter().map(|tab| {
        let icon = match tab {
            Tab::Home => "⌂",
            Tab::Memories => "✿",
        };
        format!("  {icon} {}  ", tab.label())
    });

    Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(COCOA).bg(CREAM))
        .highlight_style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
        .divider("│")
        .render(centered_tabs(inner), buf);
}

/// Tab under a click, by half of the bar
pub fn tab_at(area: Rect, column: u16) -> Option<Tab> {
    if area.width == 0 || column < area.x || column >= area.x + area.width {
        return None;
    }
    let half = area.width / 2;
    Tab::from_index(usize::from(column - area.x >= half))
}

fn centered_tabs(area: Rect) -> Rect {
    let width = 32.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
