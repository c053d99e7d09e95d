use crate::{metrics_for, Metric, Role, Tab};
use serde::{Deserialize, Serialize};

/// Charts that can appear on the dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Line chart over the monthly asset value series.
    AssetValue,
    /// Bar chart over the ESG category scores.
    EsgScore,
    /// Donut chart over the supply-chain verification slices.
    SupplyChain,
}

/// Dashboard charts in layout order.
pub const DASHBOARD_CHARTS: &[ChartKind] = &[
    ChartKind::AssetValue,
    ChartKind::EsgScore,
    ChartKind::SupplyChain,
];

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::AssetValue => "asset-value",
            ChartKind::EsgScore => "esg-score",
            ChartKind::SupplyChain => "supply-chain",
        }
    }

    /// Roles allowed to see this chart on the dashboard tab.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            ChartKind::AssetValue => &[Role::Investor, Role::Miner],
            ChartKind::EsgScore => &[Role::Esg, Role::Enterprise, Role::Miner],
            ChartKind::SupplyChain => &[Role::Jeweler, Role::Enterprise],
        }
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Card title for this chart as seen by `role`.
    pub fn title(&self, role: Role) -> &'static str {
        match self {
            ChartKind::AssetValue if role == Role::Investor => "Portfolio Value",
            ChartKind::AssetValue => "Reserve Value",
            ChartKind::EsgScore => "ESG Performance",
            ChartKind::SupplyChain => "Supply Chain Status",
        }
    }
}

/// Dashboard charts visible to `role`, in layout order.
pub fn dashboard_charts(role: Role) -> Vec<ChartKind> {
    DASHBOARD_CHARTS
        .iter()
        .copied()
        .filter(|chart| chart.visible_to(role))
        .collect()
}

/// Labels of the analytics export buttons. They carry no behavior.
pub const EXPORT_ACTIONS: &[&str] = &["Portfolio Summary", "ESG Report", "Compliance Audit"];

/// Label of the CORE view's primary action for `role`.
pub fn core_primary_action(role: Role) -> &'static str {
    if role == Role::Investor {
        "Browse Opportunities"
    } else {
        "Digitize Assets"
    }
}

/// The single top-level section rendered for a (tab, role) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewSection {
    Dashboard {
        metrics: &'static [Metric],
        charts: Vec<ChartKind>,
    },
    CoreAssets {
        primary_action: &'static str,
    },
    StriaOperations,
    Certificates,
    Analytics {
        export_actions: &'static [&'static str],
    },
}

impl ViewSection {
    /// Marker naming the section, matching the tab it belongs to.
    pub fn id(&self) -> &'static str {
        self.tab().as_str()
    }

    pub fn tab(&self) -> Tab {
        match self {
            ViewSection::Dashboard { .. } => Tab::Dashboard,
            ViewSection::CoreAssets { .. } => Tab::Core,
            ViewSection::StriaOperations => Tab::Stria,
            ViewSection::Certificates => Tab::Certificates,
            ViewSection::Analytics { .. } => Tab::Analytics,
        }
    }
}

/// Decide what the dashboard shows for the current selections.
pub fn view_plan(tab: Tab, role: Role) -> ViewSection {
    match tab {
        Tab::Dashboard => ViewSection::Dashboard {
            metrics: metrics_for(role),
            charts: dashboard_charts(role),
        },
        Tab::Core => ViewSection::CoreAssets {
            primary_action: core_primary_action(role),
        },
        Tab::Stria => ViewSection::StriaOperations,
        Tab::Certificates => ViewSection::Certificates,
        Tab::Analytics => ViewSection::Analytics {
            export_actions: EXPORT_ACTIONS,
        },
    }
}

/// The dashboard's entire UI state: one active role and one active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub role: Role,
    pub tab: Tab,
}

impl Selection {
    pub fn new(role: Role, tab: Tab) -> Self {
        Self { role, tab }
    }

    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    pub fn with_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    pub fn view(&self) -> ViewSection {
        view_plan(self.tab, self.role)
    }
}
