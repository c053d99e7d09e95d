use dioxus::prelude::*;
use shared_types::{IconName, StriaOperation, STRIA_OPERATIONS};
use shared_ui::{
    percent, Button, ButtonVariant, Card, CardField, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, Progress, ProgressIndicator,
};

use crate::components::{CertificationBadge, Glyph};

/// STRIA tab: certified mine operations and their compliance.
#[component]
pub fn StriaOperations() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "STRIA™ Certified Operations" }
            PageActions {
                Button { variant: ButtonVariant::Primary, "Request Audit" }
            }
        }
        div { class: "record-list",
            for operation in STRIA_OPERATIONS.iter() {
                StriaRow { key: "{operation.id}", operation: *operation }
            }
        }
    }
}

#[component]
fn StriaRow(operation: StriaOperation) -> Element {
    let score = percent(operation.compliance as f64);

    rsx! {
        div { class: "record-row", "data-row": "stria-operation", "data-id": operation.id,
            Card {
                CardHeader {
                    div {
                        CardTitle { "{operation.mine}" }
                        div { class: "record-location",
                            Glyph { name: IconName::MapPin, size: 14 }
                            span { "{operation.country}" }
                        }
                    }
                    CertificationBadge { status: operation.status }
                }
                div { class: "record-fields record-fields-3",
                    CardField { label: "Compliance Score",
                        div { class: "compliance-score",
                            span { class: "compliance-value", "{operation.compliance}" }
                            span { class: "compliance-max", "/100" }
                        }
                        Progress {
                            value: Some(score),
                            ProgressIndicator {}
                        }
                    }
                    CardField { label: "Last Audit",
                        div { "{operation.last_audit}" }
                        div { class: "record-note", "Next: +90 days" }
                    }
                    CardField { label: "Supply Chain",
                        div { class: "record-traced",
                            Glyph { name: IconName::CheckCircle, size: 16 }
                            span { "Fully Traced" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        dioxus_ssr::render_element(rsx! { StriaOperations {} })
    }

    #[test]
    fn renders_three_operations() {
        let html = render();
        assert_eq!(html.matches("data-row=\"stria-operation\"").count(), 3);
        assert!(html.contains("STRIA™ Certified Operations"));
        assert!(html.contains("Request Audit"));
    }

    #[test]
    fn badges_match_certification_status() {
        let html = render();
        assert_eq!(html.matches("data-status=\"certified\"").count(), 2);
        assert_eq!(html.matches("data-status=\"in-progress\"").count(), 1);
        assert!(html.contains("In Progress"));
    }

    #[test]
    fn rows_show_audit_and_trace_details() {
        let html = render();
        assert!(html.contains("2024-09-20"));
        assert_eq!(html.matches("Next: +90 days").count(), 3);
        assert_eq!(html.matches("Fully Traced").count(), 3);
        assert_eq!(html.matches("class=\"compliance-max\"").count(), 3);
    }
}
