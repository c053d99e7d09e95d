use dioxus::prelude::*;
use shared_types::{Role, Selection, Tab};

/// The dashboard's two pieces of UI state, shared through context.
///
/// Only the role bar and tab navigation write these signals.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardState {
    pub role: Signal<Role>,
    pub tab: Signal<Tab>,
}

impl DashboardState {
    pub fn new(initial: Selection) -> Self {
        Self {
            role: Signal::new(initial.role),
            tab: Signal::new(initial.tab),
        }
    }

    pub fn selection(&self) -> Selection {
        Selection::new(*self.role.read(), *self.tab.read())
    }

    pub fn select_role(&mut self, role: Role) {
        tracing::debug!(%role, "role selected");
        self.role.set(role);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(%tab, "tab selected");
        self.tab.set(tab);
    }
}

/// Read the dashboard state provided by the app root.
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>()
}
