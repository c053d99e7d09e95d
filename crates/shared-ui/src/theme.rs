use dioxus::prelude::*;

/// Element United brand colors.
///
/// The stylesheet mirrors these as CSS custom properties; the constants exist
/// for inline SVG and data-driven styles that cannot use `var(...)`.
pub mod palette {
    /// Element yellow, used for highlights and the active selection.
    pub const PRIMARY: &str = "#E8FF00";
    pub const DARK_GRAY: &str = "#2d2d2d";
    pub const GOLD: &str = "#D4AF37";
    pub const NEGATIVE: &str = "#ef4444";
}

/// Color for a trend note: gold when the change is good news, red otherwise.
pub fn change_color(positive: bool) -> &'static str {
    if positive {
        palette::GOLD
    } else {
        palette::NEGATIVE
    }
}

/// Load the brand stylesheet that defines the palette variables.
///
/// Render once near the root of the app.
#[component]
pub fn BrandTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/brand.css") }
    }
}
