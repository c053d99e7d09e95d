use pretty_assertions::assert_eq;
use shared_types::{
    supply_chain_total, AssetStatus, CertificateDetail, CertificationStatus, ASSET_VALUE_SERIES,
    CERTIFICATES, CORE_ASSETS, ESG_SCORES, STRIA_OPERATIONS, SUPPLY_CHAIN,
};

#[test]
fn supply_chain_sums_to_100() {
    assert_eq!(supply_chain_total(), 100.0);
    assert_eq!(SUPPLY_CHAIN.len(), 3);
}

#[test]
fn asset_series_covers_six_months() {
    assert_eq!(ASSET_VALUE_SERIES.len(), 6);
    assert_eq!(ASSET_VALUE_SERIES[0].month, "Jan");
    assert_eq!(ASSET_VALUE_SERIES[5].value, 2100.0);
}

#[test]
fn esg_scores_are_percentages() {
    for score in ESG_SCORES.iter() {
        assert!((0.0..=100.0).contains(&score.score), "{}", score.category);
    }
}

#[test]
fn core_assets_two_verified_one_pending() {
    let statuses: Vec<AssetStatus> = CORE_ASSETS.iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        vec![AssetStatus::Verified, AssetStatus::Verified, AssetStatus::Pending]
    );
    assert_eq!(CORE_ASSETS[2].roi, "TBD");
}

#[test]
fn stria_compliance_within_range() {
    for op in STRIA_OPERATIONS.iter() {
        assert!(op.compliance <= 100, "{}", op.id);
    }
    assert_eq!(STRIA_OPERATIONS[2].status, CertificationStatus::InProgress);
}

#[test]
fn certificates_carry_one_detail_each() {
    let details: Vec<CertificateDetail> = CERTIFICATES.iter().map(|c| c.detail).collect();
    assert_eq!(
        details,
        vec![
            CertificateDetail::Value("$1.4T"),
            CertificateDetail::Score("98/100"),
            CertificateDetail::Status("Verified"),
        ]
    );
}

