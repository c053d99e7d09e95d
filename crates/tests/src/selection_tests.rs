use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, Selection, Tab, ViewSection, ALL_ROLES, ALL_TABS};

use crate::common::{click_through, Click};

#[test]
fn dashboard_opens_on_investor_dashboard() {
    assert_eq!(Selection::default(), Selection::new(Role::Investor, Tab::Dashboard));
}

#[test]
fn role_then_tab_lands_on_that_pair() {
    let selection = click_through(
        Selection::default(),
        &[Click::Role(Role::Esg), Click::Tab(Tab::Dashboard)],
    );
    assert_eq!(selection, Selection::new(Role::Esg, Tab::Dashboard));
}

#[test]
fn switching_tabs_keeps_the_role() {
    let selection = click_through(
        Selection::default(),
        &[
            Click::Role(Role::Jeweler),
            Click::Tab(Tab::Core),
            Click::Tab(Tab::Analytics),
        ],
    );
    assert_eq!(selection.role, Role::Jeweler);
    assert_eq!(selection.tab, Tab::Analytics);
}

#[test]
fn switching_roles_keeps_the_tab() {
    let selection = click_through(
        Selection::new(Role::Miner, Tab::Stria),
        &[Click::Role(Role::Enterprise), Click::Role(Role::Investor)],
    );
    assert_eq!(selection, Selection::new(Role::Investor, Tab::Stria));
}

#[test]
fn last_tab_click_wins() {
    let selection = click_through(
        Selection::default(),
        &[Click::Tab(Tab::Core), Click::Tab(Tab::Certificates)],
    );
    assert!(matches!(selection.view(), ViewSection::Certificates));
}

#[test]
fn role_ids_round_trip() {
    for role in ALL_ROLES {
        assert_eq!(role.as_str().parse::<Role>().ok(), Some(*role));
    }
}

#[test]
fn tab_ids_round_trip() {
    for tab in ALL_TABS {
        assert_eq!(tab.as_str().parse::<Tab>().ok(), Some(*tab));
    }
}

#[test]
fn unknown_ids_are_bad_requests() {
    let role_err = "admin".parse::<Role>().unwrap_err();
    assert_eq!(role_err.kind, AppErrorKind::BadRequest);

    let tab_err = "settings".parse::<Tab>().unwrap_err();
    assert_eq!(tab_err.kind, AppErrorKind::BadRequest);
}

#[test]
fn selection_serializes_as_ids() {
    let json = serde_json::to_value(Selection::new(Role::Esg, Tab::Stria)).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "esg", "tab": "stria" }));
}
