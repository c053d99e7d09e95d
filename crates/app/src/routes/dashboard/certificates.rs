use dioxus::prelude::*;
use shared_types::{Certificate, IconName, CERTIFICATES};
use shared_ui::{Button, ButtonVariant, Card, CardActions, CardField, PageHeader, PageTitle};

use crate::components::Glyph;

/// Certificates tab: issued digital certificates.
#[component]
pub fn Certificates() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Digital Certificates" }
        }
        div { class: "record-list",
            for certificate in CERTIFICATES.iter() {
                CertificateRow { key: "{certificate.id}", certificate: *certificate }
            }
        }
    }
}

#[component]
fn CertificateRow(certificate: Certificate) -> Element {
    let detail = certificate.detail.display();
    let detail_kind = certificate.detail.kind();

    rsx! {
        div { class: "record-row", "data-row": "certificate", "data-id": certificate.id,
            Card { interactive: true,
                div { class: "record-body",
                    div { class: "record-main",
                        div { class: "certificate-heading",
                            span { class: "certificate-icon",
                                Glyph { name: IconName::Shield, size: 20 }
                            }
                            h3 { class: "card-title", "{certificate.id}" }
                        }
                        div { class: "record-fields record-fields-4",
                            CardField { label: "Type", "{certificate.kind}" }
                            CardField { label: "Entity", "{certificate.entity}" }
                            CardField { label: "Issued", "{certificate.issued}" }
                            CardField { label: "Value/Score",
                                span { "data-detail": detail_kind, "{detail}" }
                            }
                        }
                    }
                    CardActions {
                        Button { variant: ButtonVariant::Outline, "View" }
                        Button { variant: ButtonVariant::Outline, aria_label: "Download",
                            Glyph { name: IconName::Download, size: 16 }
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
        dioxus_ssr::render_element(rsx! { Certificates {} })
    }

    #[test]
    fn renders_three_certificates() {
        let html = render();
        assert_eq!(html.matches("data-row=\"certificate\"").count(), 3);
        assert!(html.contains("Digital Certificates"));
    }

    #[test]
    fn each_row_shows_its_single_detail() {
        let html = render();
        assert!(html.contains("data-detail=\"value\""));
        assert!(html.contains("data-detail=\"score\""));
        assert!(html.contains("data-detail=\"status\""));
        assert_eq!(html.matches("data-detail=").count(), CERTIFICATES.len());
        assert!(html.contains("$1.4T"));
    }

    #[test]
    fn certificate_fields_are_labelled() {
        let html = render();
        assert_eq!(html.matches("class=\"card-field-label\"").count(), 12);
        assert!(html.contains("STRIA Compliance"));
        assert!(html.contains("TwoFifty Jewelry"));
    }
}
