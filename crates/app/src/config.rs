use shared_types::{DashboardConfig, Selection};
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time so the web
/// build needs no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config into the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// A malformed file falls back to the default selection.
pub fn load_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}

fn parse_config(contents: &str) -> DashboardConfig {
    match DashboardConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(
                role = %config.dashboard.default_role,
                tab = %config.dashboard.default_tab,
                "loaded dashboard config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            DashboardConfig::default()
        }
    }
}

/// The role and tab the dashboard opens with.
pub fn initial_selection() -> Selection {
    let (selection, errors) = load_config().initial_selection();
    for e in errors {
        tracing::warn!(error = %e, "ignoring unknown dashboard default");
    }
    selection
}
