//! Static sample records behind every dashboard view.

use serde::Serialize;

/// Monthly asset value sample, in millions of dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetValuePoint {
    pub month: &'static str,
    pub value: f64,
}

/// Score for one ESG category, 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EsgScore {
    pub category: &'static str,
    pub score: f64,
}

/// Share of the supply chain in a given verification state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyChainSlice {
    pub name: &'static str,
    /// Percentage; all slices sum to 100.
    pub value: f64,
    /// CSS hex color.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    Verified,
    Pending,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Verified => "verified",
            AssetStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Verified => "Verified",
            AssetStatus::Pending => "Pending",
        }
    }
}

/// A CORE in-ground asset: a mining claim or reserve with a verified value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoreAsset {
    pub id: &'static str,
    pub location: &'static str,
    /// Verified amount in dollars, scaled by `unit`.
    pub verified: f64,
    /// Scale word for `verified` ("trillion", "billion").
    pub unit: &'static str,
    pub status: AssetStatus,
    /// Six-month ROI, or "TBD" before verification completes.
    pub roi: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationStatus {
    Certified,
    InProgress,
}

impl CertificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationStatus::Certified => "certified",
            CertificationStatus::InProgress => "in-progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificationStatus::Certified => "STRIA Certified",
            CertificationStatus::InProgress => "In Progress",
        }
    }
}

/// A mine operation enrolled in STRIA compliance certification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StriaOperation {
    pub id: &'static str,
    pub mine: &'static str,
    pub country: &'static str,
    pub status: CertificationStatus,
    /// Compliance score, 0–100.
    pub compliance: u8,
    /// ISO date of the most recent audit.
    pub last_audit: &'static str,
}

/// The single figure a certificate carries, which differs by certificate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateDetail {
    Value(&'static str),
    Score(&'static str),
    Status(&'static str),
}

impl CertificateDetail {
    /// Text shown in the "Value/Score" column.
    pub fn display(&self) -> &'static str {
        match self {
            CertificateDetail::Value(v)
            | CertificateDetail::Score(v)
            | CertificateDetail::Status(v) => v,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CertificateDetail::Value(_) => "value",
            CertificateDetail::Score(_) => "score",
            CertificateDetail::Status(_) => "status",
        }
    }
}

/// An issued digital certificate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Certificate {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub entity: &'static str,
    /// ISO issue date.
    pub issued: &'static str,
    pub detail: CertificateDetail,
}

pub static ASSET_VALUE_SERIES: [AssetValuePoint; 6] = [
    AssetValuePoint { month: "Jan", value: 1200.0 },
    AssetValuePoint { month: "Feb", value: 1400.0 },
    AssetValuePoint { month: "Mar", value: 1350.0 },
    AssetValuePoint { month: "Apr", value: 1600.0 },
    AssetValuePoint { month: "May", value: 1800.0 },
    AssetValuePoint { month: "Jun", value: 2100.0 },
];

pub static ESG_SCORES: [EsgScore; 4] = [
    EsgScore { category: "Environmental", score: 92.0 },
    EsgScore { category: "Social", score: 88.0 },
    EsgScore { category: "Governance", score: 95.0 },
    EsgScore { category: "Traceability", score: 98.0 },
];

pub static SUPPLY_CHAIN: [SupplyChainSlice; 3] = [
    SupplyChainSlice { name: "Verified", value: 87.0, color: "#10b981" },
    SupplyChainSlice { name: "In Progress", value: 10.0, color: "#f59e0b" },
    SupplyChainSlice { name: "Pending", value: 3.0, color: "#6b7280" },
];

pub static CORE_ASSETS: [CoreAsset; 3] = [
    CoreAsset {
        id: "YK-001",
        location: "Yukon Territory",
        verified: 1.4,
        unit: "trillion",
        status: AssetStatus::Verified,
        roi: "+12.4%",
    },
    CoreAsset {
        id: "AZ-REX",
        location: "Arizona, USA",
        verified: 1.4,
        unit: "trillion",
        status: AssetStatus::Verified,
        roi: "+8.9%",
    },
    CoreAsset {
        id: "TZ-SER",
        location: "Serengeti, Tanzania",
        verified: 850.0,
        unit: "billion",
        status: AssetStatus::Pending,
        roi: "TBD",
    },
];

pub static STRIA_OPERATIONS: [StriaOperation; 3] = [
    StriaOperation {
        id: "TZ-001",
        mine: "TanzRoc Gold",
        country: "Tanzania",
        status: CertificationStatus::Certified,
        compliance: 98,
        last_audit: "2024-10-15",
    },
    StriaOperation {
        id: "CA-045",
        mine: "Hoffman Yukon",
        country: "Canada",
        status: CertificationStatus::Certified,
        compliance: 95,
        last_audit: "2024-11-01",
    },
    StriaOperation {
        id: "SA-089",
        mine: "Verde Mining Co",
        country: "Chile",
        status: CertificationStatus::InProgress,
        compliance: 72,
        last_audit: "2024-09-20",
    },
];

pub static CERTIFICATES: [Certificate; 3] = [
    Certificate {
        id: "CERT-2024-001",
        kind: "CORE Asset",
        entity: "Rex Mine Gold",
        issued: "2024-11-15",
        detail: CertificateDetail::Value("$1.4T"),
    },
    Certificate {
        id: "CERT-2024-002",
        kind: "STRIA Compliance",
        entity: "TanzRoc Mining",
        issued: "2024-10-30",
        detail: CertificateDetail::Score("98/100"),
    },
    Certificate {
        id: "CERT-2024-003",
        kind: "Supply Chain",
        entity: "TwoFifty Jewelry",
        issued: "2024-11-20",
        detail: CertificateDetail::Status("Verified"),
    },
];

/// Sum of all supply-chain slice percentages.
pub fn supply_chain_total() -> f64 {
    SUPPLY_CHAIN.iter().map(|s| s.value).sum()
}
