use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Thin horizontal meter; `value` is a percentage of `max` (default 100).
#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Clamp a score into the 0–100 range a progress meter accepts.
pub fn percent(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamps_out_of_range_scores() {
        assert_eq!(percent(72.0), 72.0);
        assert_eq!(percent(120.0), 100.0);
        assert_eq!(percent(-3.0), 0.0);
    }
}
