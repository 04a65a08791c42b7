use crate::app::routing::{language_link_target, page_link_target};
use crate::i18n::t;
use crate::router::{Language, NavState, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nav: NavState,
    pub on_navigate: Callback<NavState>,
}

const NAV_ITEMS: [(Page, &str); 6] = [
    (Page::Home, "header.nav.home"),
    (Page::HistBench, "header.nav.histbench"),
    (Page::HistAgent, "header.nav.histagent"),
    (Page::Impact, "header.nav.impact"),
    (Page::Authors, "header.nav.team"),
    (Page::Submit, "header.nav.submit"),
];

fn nav_click(on_navigate: &Callback<NavState>, target: NavState) -> Callback<MouseEvent> {
    let cb = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        cb.emit(target);
    })
}

fn language_link(p: &Props, language: Language) -> Html {
    let target = language_link_target(p.nav, language);
    let active = p.nav.language == language;
    html! {
        <a
            href={format!("#{}", target.fragment())}
            class={if active { "active" } else { "" }}
            onclick={nav_click(&p.on_navigate, target)}
        >
            { t(match language {
                Language::En => "header.lang.en",
                Language::Zh => "header.lang.zh",
            }) }
        </a>
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let home_target = page_link_target(p.nav, Page::Home);

    let nav_items = NAV_ITEMS.iter().map(|(page, label_key)| {
        let target = page_link_target(p.nav, *page);
        let active = p.nav.page == *page;
        html! {
            <li>
                <a
                    href={format!("#{}", target.fragment())}
                    class={if active { "active" } else { "" }}
                    aria-current={if active { Some("page") } else { None }}
                    onclick={nav_click(&p.on_navigate, target)}
                >
                    { t(label_key) }
                </a>
            </li>
        }
    });

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("header.skip_to_content") }</a>
            <div class="container">
                <div class="site-title-container">
                    <a
                        href={format!("#{}", home_target.fragment())}
                        class="site-title-link"
                        onclick={nav_click(&p.on_navigate, home_target)}
                    >
                        <span class="site-title">{ "HistAI" }</span>
                    </a>
                </div>
                <nav aria-label="Primary">
                    <ul>
                        { for nav_items }
                    </ul>
                </nav>
                <div class="language-switcher">
                    { language_link(p, Language::En) }
                    <span>{ "|" }</span>
                    { language_link(p, Language::Zh) }
                </div>
            </div>
        </header>
    }
}
