use crate::{AppError, Role, Selection, Tab};
use serde::{Deserialize, Serialize};

/// The `[dashboard]` table of `config.toml`.
///
/// Values are kept as raw ids so that a typo degrades to the default
/// selection instead of rejecting the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    #[serde(default = "default_role")]
    pub default_role: String,
    #[serde(default = "default_tab")]
    pub default_tab: String,
}

fn default_role() -> String {
    Role::default().as_str().to_string()
}

fn default_tab() -> String {
    Tab::default().as_str().to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_tab: default_tab(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl DashboardConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn initial_role(&self) -> Result<Role, AppError> {
        self.dashboard.default_role.parse()
    }

    pub fn initial_tab(&self) -> Result<Tab, AppError> {
        self.dashboard.default_tab.parse()
    }

    /// Starting selection, replacing any unrecognized id with its default.
    ///
    /// Returns the errors for the ids that were replaced so the caller can
    /// report them.
    pub fn initial_selection(&self) -> (Selection, Vec<AppError>) {
        let mut errors = Vec::new();
        let role = self.initial_role().unwrap_or_else(|e| {
            errors.push(e);
            Role::default()
        });
        let tab = self.initial_tab().unwrap_or_else(|e| {
            errors.push(e);
            Tab::default()
        });
        (Selection::new(role, tab), errors)
    }
}
