use crate::app::routing::page_link_target;
use crate::components::link_button::LinkButton;
use crate::config::{DATASET_LINK, DEMO_LINK, GITHUB_LINK, PAPER_LINK};
use crate::i18n::t;
use crate::router::{Language, NavState, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
    pub on_navigate: Callback<NavState>,
}

fn internal_link(p: &Props, page: Page, label_key: &str, class: &'static str) -> Html {
    let target = page_link_target(NavState::new(Page::Home, p.language), page);
    let onclick = {
        let cb = p.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(target);
        })
    };
    html! {
        <LinkButton
            label={t(label_key)}
            href={format!("#{}", target.fragment())}
            onclick={Some(onclick)}
            class={AttrValue::Static(class)}
        />
    }
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    html! {
        <div class="page home-page" data-testid="home-page">
            <section class="hero">
                <h1>{ t("home.hero.title") }</h1>
                <p class="hero-subtitle">{ t("home.hero.subtitle") }</p>
                <div class="hero-actions">
                    { internal_link(p, Page::HistBench, "home.hero.cta.explore_histbench", "btn btn-primary") }
                    <LinkButton
                        label={t("home.hero.cta.try_demo")}
                        href={DEMO_LINK}
                        external=true
                    />
                    <LinkButton
                        label={t("home.hero.cta.view_github")}
                        href={GITHUB_LINK}
                        external=true
                        class={AttrValue::Static("btn btn-secondary")}
                    />
                </div>
            </section>

            <section class="demo-cta">
                <h2>{ t("home.demo_cta.title") }</h2>
                <p>{ t("home.demo_cta.description") }</p>
            </section>

            <section class="highlights">
                <article>
                    <h3>{ t("home.highlights.histbench.title") }</h3>
                    <p>{ t("home.highlights.histbench.text") }</p>
                </article>
                <article>
                    <h3>{ t("home.highlights.histagent.title") }</h3>
                    <p>{ t("home.highlights.histagent.text") }</p>
                </article>
                <article>
                    <h3>{ t("home.highlights.advancing.title") }</h3>
                    <p>{ t("home.highlights.advancing.text") }</p>
                </article>
            </section>

            <section class="dive-deeper">
                <h2>{ t("home.dive_deeper.title") }</h2>
                <div class="hero-actions">
                    <LinkButton
                        label={t("home.dive_deeper.cta.read_paper")}
                        href={PAPER_LINK}
                        external=true
                    />
                    <LinkButton
                        label={t("home.dive_deeper.cta.access_dataset")}
                        href={DATASET_LINK}
                        external=true
                    />
                </div>
            </section>

            <section class="contribute-cta">
                <h2>{ t("home.contribute.title") }</h2>
                <p>{ t("home.contribute.subtitle") }</p>
                { internal_link(p, Page::Submit, "home.contribute.cta", "btn btn-primary") }
            </section>
        </div>
    }
}
