use pretty_assertions::assert_eq;
use shared_types::{
    dashboard_charts, view_plan, ChartKind, Role, Tab, ViewSection, ALL_ROLES, EXPORT_ACTIONS,
};

use crate::common::all_selections;

#[test]
fn every_selection_maps_to_its_tab() {
    for selection in all_selections() {
        let section = selection.view();
        assert_eq!(section.tab(), selection.tab);
        assert_eq!(section.id(), selection.tab.as_str());
    }
}

#[test]
fn esg_dashboard_has_esg_chart_only() {
    let charts = dashboard_charts(Role::Esg);
    assert_eq!(charts, vec![ChartKind::EsgScore]);
}

#[test]
fn investor_dashboard_has_asset_value_only() {
    let charts = dashboard_charts(Role::Investor);
    assert!(charts.contains(&ChartKind::AssetValue));
    assert!(!charts.contains(&ChartKind::SupplyChain));
    assert_eq!(charts.len(), 1);
}

#[test]
fn chart_visibility_per_role() {
    assert_eq!(
        dashboard_charts(Role::Miner),
        vec![ChartKind::AssetValue, ChartKind::EsgScore]
    );
    assert_eq!(
        dashboard_charts(Role::Enterprise),
        vec![ChartKind::EsgScore, ChartKind::SupplyChain]
    );
    assert_eq!(dashboard_charts(Role::Jeweler), vec![ChartKind::SupplyChain]);
}

#[test]
fn every_role_sees_at_least_one_chart() {
    for role in ALL_ROLES {
        assert!(!dashboard_charts(*role).is_empty(), "{role}");
    }
}

#[test]
fn asset_chart_title_depends_on_role() {
    assert_eq!(ChartKind::AssetValue.title(Role::Investor), "Portfolio Value");
    assert_eq!(ChartKind::AssetValue.title(Role::Miner), "Reserve Value");
}

#[test]
fn core_action_only_browses_for_investors() {
    for role in ALL_ROLES {
        let expected = if *role == Role::Investor {
            "Browse Opportunities"
        } else {
            "Digitize Assets"
        };
        assert_eq!(
            view_plan(Tab::Core, *role),
            ViewSection::CoreAssets {
                primary_action: expected
            }
        );
    }
}

#[test]
fn record_and_analytics_views_ignore_role() {
    for role in ALL_ROLES {
        assert_eq!(view_plan(Tab::Stria, *role), ViewSection::StriaOperations);
        assert_eq!(view_plan(Tab::Certificates, *role), ViewSection::Certificates);
        assert_eq!(
            view_plan(Tab::Analytics, *role),
            ViewSection::Analytics {
                export_actions: EXPORT_ACTIONS
            }
        );
    }
}
