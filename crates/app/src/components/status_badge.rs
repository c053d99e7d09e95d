use dioxus::prelude::*;
use shared_types::{AssetStatus, CertificationStatus, IconName};
use shared_ui::{Badge, BadgeVariant};

use super::Glyph;

/// Verified/pending badge for a CORE asset row, with a matching icon.
#[component]
pub fn AssetStatusBadge(status: AssetStatus) -> Element {
    let (variant, icon) = match status {
        AssetStatus::Verified => (BadgeVariant::Highlight, IconName::CheckCircle),
        AssetStatus::Pending => (BadgeVariant::Pending, IconName::Clock),
    };
    let label = status.label();

    rsx! {
        span { class: "status-badge", "data-status": status.as_str(),
            Badge { variant,
                Glyph { name: icon, size: 12 }
                span { "{label}" }
            }
        }
    }
}

/// Certified/in-progress badge for a STRIA operation row.
#[component]
pub fn CertificationBadge(status: CertificationStatus) -> Element {
    let variant = match status {
        CertificationStatus::Certified => BadgeVariant::Highlight,
        CertificationStatus::InProgress => BadgeVariant::Pending,
    };
    let label = status.label();

    rsx! {
        span { class: "status-badge", "data-status": status.as_str(),
            Badge { variant, "{label}" }
        }
    }
}
