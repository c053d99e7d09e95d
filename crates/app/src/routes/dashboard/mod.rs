pub mod analytics;
pub mod certificates;
mod chart_data;
pub mod core_assets;
pub mod overview;
pub mod stria;

use dioxus::prelude::*;
use shared_types::{view_plan, Role, Selection, Tab, ViewSection};

use crate::state::use_dashboard_state;

/// Role-adaptive dashboard: renders the section for the selected tab, shaped
/// by the selected role.
#[component]
pub fn Dashboard() -> Element {
    let Selection { role, tab } = use_dashboard_state().selection();

    rsx! { DashboardView { role, tab } }
}

/// Exactly one top-level section for a (tab, role) pair.
#[component]
pub fn DashboardView(role: Role, tab: Tab) -> Element {
    let section = view_plan(tab, role);
    let id = section.id();

    let body = match section {
        ViewSection::Dashboard { metrics, charts } => rsx! {
            overview::Overview { role, metrics, charts }
        },
        ViewSection::CoreAssets { primary_action } => rsx! {
            core_assets::CoreAssets { primary_action }
        },
        ViewSection::StriaOperations => rsx! { stria::StriaOperations {} },
        ViewSection::Certificates => rsx! { certificates::Certificates {} },
        ViewSection::Analytics { export_actions } => rsx! {
            analytics::Analytics { export_actions }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        section { class: "dashboard-view", "data-view": id,
            {body}
        }
    }
}
