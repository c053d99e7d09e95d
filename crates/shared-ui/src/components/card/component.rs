use dioxus::prelude::*;

/// White rounded panel used for tiles, chart frames, and list rows.
///
/// `interactive` adds a hover border for rows the user can act on.
#[component]
pub fn Card(
    #[props(default = false)] interactive: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![Attribute::new("class", "card", None, false)];
    if interactive {
        base.push(Attribute::new("data-interactive", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Row with a title on the left and status or actions on the right.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

/// Right-aligned button cluster inside a card.
#[component]
pub fn CardActions(children: Element) -> Element {
    rsx! {
        div { class: "card-actions", {children} }
    }
}

/// Labeled figure inside a card: a small caption above a value.
#[component]
pub fn CardField(
    label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-field", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            div { class: "card-field-label", "{label}" }
            div { class: "card-field-value", {children} }
        }
    }
}
