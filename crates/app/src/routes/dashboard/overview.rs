use dioxus::prelude::*;
use shared_types::{ChartKind, Metric, Role};
use shared_ui::theme::{change_color, palette};
use shared_ui::{BarChart, Card, CardTitle, DonutChart, LineChart};

use super::chart_data::{asset_value_data, esg_score_data, supply_chain_slices};

const DASHBOARD_CHART_HEIGHT: u32 = 240;

/// Dashboard tab: the role's metric grid followed by its permitted charts.
#[component]
pub fn Overview(role: Role, metrics: &'static [Metric], charts: Vec<ChartKind>) -> Element {
    rsx! {
        div { class: "overview",
            div { class: "metric-grid",
                for metric in metrics.iter() {
                    MetricTile { key: "{metric.label}", metric: *metric }
                }
            }
            div { class: "chart-grid",
                for kind in charts.into_iter() {
                    DashboardChart { kind, role }
                }
            }
        }
    }
}

#[component]
fn MetricTile(metric: Metric) -> Element {
    let color = change_color(metric.positive);

    rsx! {
        div { class: "metric-tile", "data-metric": metric.label,
            Card {
                div { class: "metric-label", "{metric.label}" }
                div { class: "metric-value", "{metric.value}" }
                div { class: "metric-change", style: "color: {color};", "{metric.change}" }
            }
        }
    }
}

/// One chart card, titled for the viewing role.
#[component]
fn DashboardChart(kind: ChartKind, role: Role) -> Element {
    let title = kind.title(role);
    let chart = match kind {
        ChartKind::AssetValue => rsx! {
            LineChart {
                data: asset_value_data(),
                stroke: palette::GOLD.to_string(),
                height: DASHBOARD_CHART_HEIGHT,
            }
        },
        ChartKind::EsgScore => rsx! {
            BarChart {
                data: esg_score_data(),
                fill: palette::DARK_GRAY.to_string(),
                height: DASHBOARD_CHART_HEIGHT,
            }
        },
        ChartKind::SupplyChain => rsx! {
            DonutChart {
                slices: supply_chain_slices(),
                height: DASHBOARD_CHART_HEIGHT,
            }
        },
    };

    rsx! {
        div { class: "chart-card", "data-chart": kind.as_str(),
            Card {
                CardTitle { "{title}" }
                {chart}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{dashboard_charts, metrics_for};

    fn render(role: Role) -> String {
        let metrics = metrics_for(role);
        let charts = dashboard_charts(role);
        dioxus_ssr::render_element(rsx! { Overview { role, metrics, charts } })
    }

    #[test]
    fn enterprise_sees_esg_and_supply_chain() {
        let html = render(Role::Enterprise);
        assert!(!html.contains("data-chart=\"asset-value\""));
        assert!(html.contains("data-chart=\"esg-score\""));
        assert!(html.contains("data-chart=\"supply-chain\""));
        assert!(html.contains("Supply Chain Status"));
    }

    #[test]
    fn jeweler_sees_only_supply_chain() {
        let html = render(Role::Jeweler);
        assert_eq!(html.matches("data-chart=").count(), 1);
        assert!(html.contains("data-chart=\"supply-chain\""));
        assert!(html.contains("87%"));
    }

    #[test]
    fn positive_changes_are_gold() {
        let html = render(Role::Esg);
        assert_eq!(html.matches("color: #D4AF37;").count(), 4);
    }

    #[test]
    fn negative_change_is_red() {
        let metric = Metric {
            label: "Risk Exposure",
            value: "High",
            change: "Increased",
            positive: false,
        };
        let html = dioxus_ssr::render_element(rsx! { MetricTile { metric } });
        assert!(html.contains("color: #ef4444;"));
        assert!(html.contains("data-metric=\"Risk Exposure\""));
    }

    #[test]
    fn metric_values_are_rendered() {
        let html = render(Role::Investor);
        for metric in metrics_for(Role::Investor) {
            assert!(html.contains(metric.label));
            assert!(html.contains(metric.value));
        }
    }
}
