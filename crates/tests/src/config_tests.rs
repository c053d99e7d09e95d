use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, DashboardConfig, Role, Selection, Tab};

use crate::common::config_with;

#[test]
fn full_config_is_honoured() {
    let toml = config_with("default_role = \"jeweler\"\ndefault_tab = \"certificates\"");
    let config = DashboardConfig::from_toml_str(&toml).unwrap();
    let (selection, errors) = config.initial_selection();
    assert_eq!(selection, Selection::new(Role::Jeweler, Tab::Certificates));
    assert!(errors.is_empty());
}

#[test]
fn missing_keys_use_defaults() {
    let config = DashboardConfig::from_toml_str(&config_with("default_tab = \"stria\"")).unwrap();
    assert_eq!(
        config.initial_selection().0,
        Selection::new(Role::Investor, Tab::Stria)
    );
}

#[test]
fn empty_file_uses_defaults() {
    let config = DashboardConfig::from_toml_str("").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.initial_selection().0, Selection::default());
}

#[test]
fn unknown_ids_fall_back_and_are_reported() {
    let toml = config_with("default_role = \"auditor\"\ndefault_tab = \"core\"");
    let config = DashboardConfig::from_toml_str(&toml).unwrap();
    let (selection, errors) = config.initial_selection();
    assert_eq!(selection, Selection::new(Role::Investor, Tab::Core));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, AppErrorKind::BadRequest);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = DashboardConfig::from_toml_str("[dashboard\ndefault_role = ").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}
