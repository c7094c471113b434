//! Dashboard view state: which company and which construct are on screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::report::{CompanyId, ConstructKind, SwotQuadrant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub company: CompanyId,
    /// Construct whose detail panel is open.
    pub selected: Option<ConstructKind>,
    /// Competitor table expanded inside the open panel.
    pub competitors_expanded: bool,
    pub swot_tab: SwotQuadrant,
}

impl DashboardState {
    /// Swap companies. Selection and panel state are kept.
    pub fn toggle_company(&mut self) -> CompanyId {
        self.company = self.company.toggled();
        self.company
    }

    /// Open the detail panel for `kind`, collapsing panel-local sections
    /// when switching to a different construct.
    pub fn select(&mut self, kind: ConstructKind) {
        if self.selected != Some(kind) {
            self.competitors_expanded = false;
            self.swot_tab = SwotQuadrant::default();
        }
        self.selected = Some(kind);
    }

    pub fn is_selected(&self, kind: ConstructKind) -> bool {
        self.selected == Some(kind)
    }

    pub fn toggle_competitors(&mut self) -> bool {
        self.competitors_expanded = !self.competitors_expanded;
        self.competitors_expanded
    }
}
