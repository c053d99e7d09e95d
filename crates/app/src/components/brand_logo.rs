use dioxus::prelude::*;
use shared_ui::theme::palette;

/// Hexagonal "E" mark drawn in the brand primary color.
#[component]
pub fn BrandLogo(#[props(default = 36)] size: u32) -> Element {
    rsx! {
        svg {
            class: "brand-logo",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 100 100",
            fill: "none",
            stroke: palette::PRIMARY,
            stroke_width: "4",
            // Outer and inner hexagons
            path { d: "M50 5 L90 27.5 L90 72.5 L50 95 L10 72.5 L10 27.5 Z" }
            path { d: "M50 15 L80 32.5 L80 67.5 L50 85 L20 67.5 L20 32.5 Z" }
            // E strokes
            path { d: "M50 25 L70 37.5 L70 62.5 L50 75" }
            line { x1: "35", y1: "50", x2: "65", y2: "50" }
        }
    }
}
