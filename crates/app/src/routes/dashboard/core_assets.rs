use dioxus::prelude::*;
use shared_types::{CoreAsset, IconName, CORE_ASSETS};
use shared_ui::theme::palette;
use shared_ui::{
    Button, ButtonVariant, Card, CardActions, CardField, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle,
};

use crate::components::{AssetStatusBadge, Glyph};
use crate::format_helpers::format_verified_amount;

/// CORE tab: the in-ground asset register.
#[component]
pub fn CoreAssets(primary_action: &'static str) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "CORE™ In-Ground Assets" }
            PageActions {
                Button { variant: ButtonVariant::Primary, "{primary_action}" }
            }
        }
        div { class: "record-list",
            for asset in CORE_ASSETS.iter() {
                CoreAssetRow { key: "{asset.id}", asset: *asset }
            }
        }
    }
}

#[component]
fn CoreAssetRow(asset: CoreAsset) -> Element {
    let amount = format_verified_amount(asset.verified, asset.unit);
    let gold = palette::GOLD;

    rsx! {
        div { class: "record-row", "data-row": "core-asset", "data-id": asset.id,
            Card { interactive: true,
                div { class: "record-body",
                    div { class: "record-main",
                        CardHeader {
                            CardTitle { "{asset.id}" }
                            AssetStatusBadge { status: asset.status }
                        }
                        div { class: "record-location",
                            Glyph { name: IconName::MapPin, size: 14 }
                            span { "{asset.location}" }
                        }
                        div { class: "record-fields record-fields-3",
                            CardField { label: "Verified Value", "{amount}" }
                            CardField { label: "ROI (6 mo)",
                                span { style: "color: {gold};", "{asset.roi}" }
                            }
                            CardField { label: "Status", "Preserved" }
                        }
                    }
                    CardActions {
                        Button { variant: ButtonVariant::Ghost, aria_label: "View",
                            Glyph { name: IconName::Eye, size: 18 }
                        }
                        Button { variant: ButtonVariant::Ghost, aria_label: "Download",
                            Glyph { name: IconName::Download, size: 18 }
                        }
                    }
                }
            }
        }
    }
}
