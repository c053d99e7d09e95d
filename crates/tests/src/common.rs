use shared_types::{Role, Selection, Tab, ALL_ROLES, ALL_TABS};

/// Every (role, tab) pair the dashboard can be in.
pub fn all_selections() -> Vec<Selection> {
    ALL_ROLES
        .iter()
        .flat_map(|role| ALL_TABS.iter().map(move |tab| Selection::new(*role, *tab)))
        .collect()
}

/// A click on the role bar or the tab bar.
pub enum Click {
    Role(Role),
    Tab(Tab),
}

/// Replay `clicks` in order starting from `start`.
pub fn click_through(start: Selection, clicks: &[Click]) -> Selection {
    clicks.iter().fold(start, |selection, click| match click {
        Click::Role(role) => selection.with_role(*role),
        Click::Tab(tab) => selection.with_tab(*tab),
    })
}

/// A config file with the given `[dashboard]` body.
pub fn config_with(body: &str) -> String {
    format!("[dashboard]\n{body}\n")
}
