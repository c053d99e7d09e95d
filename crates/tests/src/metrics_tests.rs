use pretty_assertions::assert_eq;
use shared_types::{metrics_for, metrics_for_key, Role, ALL_ROLES, METRICS_PER_ROLE};

#[test]
fn every_role_has_four_complete_metrics() {
    for role in ALL_ROLES {
        let metrics = metrics_for(*role);
        assert_eq!(metrics.len(), METRICS_PER_ROLE, "{role}");
        for metric in metrics {
            assert!(!metric.label.is_empty(), "{role}");
            assert!(!metric.value.is_empty(), "{role}");
        }
    }
}

#[test]
fn investor_metrics_in_display_order() {
    let labels: Vec<&str> = metrics_for(Role::Investor).iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec!["Portfolio Value", "Assets Owned", "ROI (YTD)", "Verified Claims"]
    );
}

#[test]
fn miner_leads_with_verified_reserves() {
    let first = &metrics_for(Role::Miner)[0];
    assert_eq!(first.label, "Verified Reserves");
    assert_eq!(first.value, "$1.4T");
    assert!(first.positive);
}

#[test]
fn lookup_by_id_matches_lookup_by_role() {
    for role in ALL_ROLES {
        assert_eq!(metrics_for_key(role.as_str()), metrics_for(*role));
    }
}

#[test]
fn unknown_id_has_no_metrics() {
    assert!(metrics_for_key("auditor").is_empty());
    assert!(metrics_for_key("").is_empty());
}
