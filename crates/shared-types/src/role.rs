use crate::{AppError, IconName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewer persona controlling which metrics and charts the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Mine operator.
    Miner,
    #[default]
    Investor,
    Enterprise,
    Jeweler,
    /// ESG analyst.
    Esg,
}

/// All roles in role-bar display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Miner,
    Role::Investor,
    Role::Enterprise,
    Role::Jeweler,
    Role::Esg,
];

impl Role {
    /// Lowercase id used in config and `data-*` markers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Miner => "miner",
            Role::Investor => "investor",
            Role::Enterprise => "enterprise",
            Role::Jeweler => "jeweler",
            Role::Esg => "esg",
        }
    }

    /// Human-readable name for the role selector.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Miner => "Mine Operator",
            Role::Investor => "Individual Investor",
            Role::Enterprise => "Enterprise Buyer",
            Role::Jeweler => "Jeweler",
            Role::Esg => "ESG Analyst",
        }
    }

    pub fn icon(&self) -> IconName {
        match self {
            Role::Miner => IconName::MapPin,
            Role::Investor => IconName::DollarSign,
            Role::Enterprise => IconName::Package,
            Role::Jeweler => IconName::Shield,
            Role::Esg => IconName::Leaf,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ROLES
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("unknown role: {s}")))
    }
}
