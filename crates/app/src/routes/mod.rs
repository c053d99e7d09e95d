pub mod dashboard;
pub mod not_found;

use crate::components::{BrandLogo, Glyph};
use crate::state::use_dashboard_state;
use dioxus::prelude::*;
use shared_types::{IconName, ALL_ROLES, ALL_TABS};
use shared_ui::{Button, ButtonVariant};

use dashboard::Dashboard;
use not_found::NotFound;

pub const TAGLINE: &str = "Every element tells a story. Element United built the system that maps them all\u{2014}making trust infrastructure.";

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Page chrome around every dashboard view: header, role bar, and footer.
#[component]
fn AppLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            DashboardHeader {}
            RoleBar {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
            AppFooter {}
        }
    }
}

/// Dark header with the brand, tab navigation, and utility icons.
#[component]
pub fn DashboardHeader() -> Element {
    let mut state = use_dashboard_state();
    let active_tab = *state.tab.read();

    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                div { class: "app-brand",
                    BrandLogo {}
                    span { class: "app-brand-name", "Identify.earth" }
                }
                nav { class: "app-tabs",
                    for tab in ALL_TABS.iter().copied() {
                        Button {
                            key: "{tab}",
                            variant: ButtonVariant::Nav,
                            active: tab == active_tab,
                            onclick: move |_| state.select_tab(tab),
                            "data-tab": tab.as_str(),
                            {tab.label()}
                        }
                    }
                }
                div { class: "app-header-actions",
                    Button { variant: ButtonVariant::Ghost, aria_label: "Search",
                        Glyph { name: IconName::Search, size: 20 }
                    }
                    Button { variant: ButtonVariant::Ghost, aria_label: "Notifications",
                        Glyph { name: IconName::Bell, size: 20 }
                    }
                    Button { variant: ButtonVariant::Ghost, aria_label: "Account",
                        Glyph { name: IconName::User, size: 20 }
                    }
                }
            }
        }
    }
}

/// "View as:" strip with one pill per role.
#[component]
pub fn RoleBar() -> Element {
    let mut state = use_dashboard_state();
    let active_role = *state.role.read();

    rsx! {
        div { class: "role-bar",
            div { class: "role-bar-inner",
                span { class: "role-bar-label", "View as:" }
                for role in ALL_ROLES.iter().copied() {
                    Button {
                        key: "{role}",
                        variant: ButtonVariant::Pill,
                        active: role == active_role,
                        onclick: move |_| state.select_role(role),
                        "data-role": role.as_str(),
                        Glyph { name: role.icon(), size: 16 }
                        span { {role.label()} }
                    }
                }
            }
        }
    }
}

#[component]
fn AppFooter() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { class: "app-footer-tagline", "{TAGLINE}" }
        }
    }
}
