use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
}

impl Variant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Outline => "btn btn-outline",
            Self::Destructive => "btn btn-destructive",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub disabled: bool,
    /// Render as a form submit button instead of a plain one.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let kind = if p.submit { "submit" } else { "button" };
    html! {
        <button
            id={p.id.clone()}
            type={kind}
            class={p.variant.class()}
            disabled={p.disabled}
            aria-label={p.aria_label.clone()}
            {onclick}
        >
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label_and_variant() {
        let props = Props {
            label: AttrValue::from("Confirm"),
            onclick: Callback::noop(),
            variant: Variant::Destructive,
            disabled: false,
            submit: false,
            id: None,
            aria_label: None,
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Confirm"));
        assert!(html.contains("btn-destructive"));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn submit_buttons_can_be_disabled() {
        let props = Props {
            label: AttrValue::from("Draw"),
            onclick: Callback::noop(),
            variant: Variant::Primary,
            disabled: true,
            submit: true,
            id: Some(AttrValue::from("draw-btn")),
            aria_label: None,
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("disabled"));
        assert!(html.contains("draw-btn"));
    }
}
