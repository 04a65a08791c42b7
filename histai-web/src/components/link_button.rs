use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("btn"))]
    pub class: AttrValue,
}

/// Anchor styled as a call-to-action button. External links open in a new
/// tab; internal links carry the navigation click handler.
#[function_component(LinkButton)]
pub fn link_button(p: &Props) -> Html {
    html! {
        <a
            class={p.class.clone()}
            href={p.href.clone()}
            target={p.external.then_some("_blank")}
            rel={p.external.then_some("noopener noreferrer")}
            onclick={p.onclick.clone()}
        >
            { p.label.clone() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn external_links_open_in_new_tab() {
        let props = Props {
            label: AttrValue::from("Paper"),
            href: AttrValue::from("https://example.org/paper"),
            external: true,
            onclick: None,
            class: AttrValue::Static("btn"),
        };
        let html = block_on(LocalServerRenderer::<LinkButton>::with_props(props).render());
        assert!(html.contains("_blank"));
        assert!(html.contains("noopener"));
    }

    #[test]
    fn internal_links_stay_in_tab() {
        let props = Props {
            label: AttrValue::from("Explore"),
            href: AttrValue::from("#histbench_en"),
            external: false,
            onclick: None,
            class: AttrValue::Static("btn"),
        };
        let html = block_on(LocalServerRenderer::<LinkButton>::with_props(props).render());
        assert!(!html.contains("_blank"));
        assert!(html.contains("#histbench_en"));
    }
}
