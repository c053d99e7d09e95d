use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    /// CORE in-ground asset registry.
    Core,
    /// STRIA certified operations.
    Stria,
    Certificates,
    Analytics,
}

/// All tabs in navigation order.
pub const ALL_TABS: &[Tab] = &[
    Tab::Dashboard,
    Tab::Core,
    Tab::Stria,
    Tab::Certificates,
    Tab::Analytics,
];

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Core => "core",
            Tab::Stria => "stria",
            Tab::Certificates => "certificates",
            Tab::Analytics => "analytics",
        }
    }

    /// Navigation label: the id with its first letter uppercased.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Core => "Core",
            Tab::Stria => "Stria",
            Tab::Certificates => "Certificates",
            Tab::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TABS
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("unknown tab: {s}")))
    }
}
