use dioxus::prelude::*;
use shared_ui::theme::palette;
use shared_ui::{BarChart, Button, ButtonVariant, Card, CardTitle, LineChart, PageHeader, PageTitle};

use super::chart_data::{asset_value_data, esg_score_data};

const ANALYTICS_CHART_HEIGHT: u32 = 300;

/// Analytics tab: performance and compliance charts plus report exports.
#[component]
pub fn Analytics(export_actions: &'static [&'static str]) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Analytics & Reporting" }
        }
        div { class: "chart-grid",
            div { class: "chart-card", "data-chart": "asset-performance",
                Card {
                    CardTitle { "Asset Performance" }
                    LineChart {
                        data: asset_value_data(),
                        stroke: palette::GOLD.to_string(),
                        height: ANALYTICS_CHART_HEIGHT,
                        legend: "Value ($M)",
                    }
                }
            }
            div { class: "chart-card", "data-chart": "esg-compliance",
                Card {
                    CardTitle { "ESG Compliance" }
                    BarChart {
                        data: esg_score_data(),
                        fill: palette::PRIMARY.to_string(),
                        height: ANALYTICS_CHART_HEIGHT,
                        legend: "Score",
                    }
                }
            }
        }
        Card {
            CardTitle { "Export Reports" }
            div { class: "export-actions",
                for action in export_actions.iter() {
                    Button { key: "{action}", variant: ButtonVariant::Outline, "{action}" }
                }
            }
        }
    }
}
