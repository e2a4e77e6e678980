//! Main Screen Tabs
//!
//! Two tabs, Home and Memories. Selecting a tab moves focus: exactly one
//! tab is focused at a time, and the previously selected one is told it
//! lost focus.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Memories,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Memories];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Memories => "Memories",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Memories => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The other tab
    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Memories,
            Self::Memories => Self::Home,
        }
    }
}

/// A focus handoff between tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabChange {
    pub blurred: Tab,
    pub focused: Tab,
}

/// Selected-tab state
#[derive(Debug, Default)]
pub struct TabBar {
    selected: Tab,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn is_focused(&self, tab: Tab) -> bool {
        self.selected == tab
    }

    /// Select a tab. Reselecting the current tab is not a change.
    pub fn select(&mut self, tab: Tab) -> Option<TabChange> {
        if self.selected == tab {
            return None;
        }
        let change = TabChange {
            blurred: self.selected,
            focused: tab,
        };
        self.selected = tab;
        tracing::debug!(tab = tab.label(), "Tab selected");
        Some(change)
    }

    pub fn cycle(&mut self) -> Option<TabChange> {
        self.select(self.selected.next())
    }
}
