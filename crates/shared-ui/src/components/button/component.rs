use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Brand-yellow call to action.
    #[default]
    Primary,
    /// Bordered neutral button.
    Outline,
    /// Borderless icon button.
    Ghost,
    /// Header navigation entry.
    Nav,
    /// Rounded selector chip.
    Pill,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Nav => "nav",
            ButtonVariant::Pill => "pill",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Marks the selected entry of a nav or pill group.
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Button used for actions, tab navigation, and role selection.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new(
            "data-active",
            if props.active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pill_is_marked() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Pill, active: true, "Jeweler" }
        });
        assert!(html.contains("data-style=\"pill\""));
        assert!(html.contains("data-active=\"true\""));
    }

    #[test]
    fn buttons_default_to_inactive_primary() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { "Request Audit" }
        });
        assert!(html.contains("data-style=\"primary\""));
        assert!(html.contains("data-active=\"false\""));
    }
}
