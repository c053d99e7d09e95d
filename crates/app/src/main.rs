use dioxus::prelude::*;

mod components;
mod config;
mod format_helpers;
mod routes;
mod state;

use routes::Route;
use state::DashboardState;

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = client_platform(), "starting dashboard"));

    // Role and tab selection shared by the layout and every view
    use_context_provider(|| DashboardState::new(config::initial_selection()));

    rsx! {
        shared_ui::theme::BrandTheme {}
        Router::<Route> {}
    }
}
