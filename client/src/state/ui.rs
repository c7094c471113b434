//! Shared chrome state: theme and the sidebar slide-out panel.
//!
//! DESIGN
//! ======
//! Kept apart from page state so the top bar and sidebar can render on
//! every route without knowing which flow is active.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Slide-out panels reachable from the sidebar rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarPanel {
    History,
}

impl SidebarPanel {
    pub fn title(self) -> &'static str {
        match self {
            Self::History => "Score History",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_panel: Option<SidebarPanel>,
}

impl UiState {
    /// Open `panel`, or close it when it is already open.
    pub fn toggle_panel(&mut self, panel: SidebarPanel) {
        self.sidebar_panel = if self.sidebar_panel == Some(panel) { None } else { Some(panel) };
    }

    pub fn is_panel_open(&self, panel: SidebarPanel) -> bool {
        self.sidebar_panel == Some(panel)
    }
}
