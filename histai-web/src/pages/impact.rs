use crate::i18n::t;
use crate::router::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
}

#[function_component(ImpactPage)]
pub fn impact_page(_p: &Props) -> Html {
    html! {
        <div class="page impact-page" data-testid="impact-page">
            <h1>{ t("impact.title") }</h1>
            <p>{ t("impact.intro") }</p>

            <section>
                <h2>{ t("impact.vision.title") }</h2>
                <p>{ t("impact.vision.text") }</p>
            </section>
            <section>
                <h2>{ t("impact.education.title") }</h2>
                <p>{ t("impact.education.text") }</p>
            </section>
            <section>
                <h2>{ t("impact.research.title") }</h2>
                <p>{ t("impact.research.text") }</p>
            </section>
        </div>
    }
}
