use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
}

#[function_component(HistAgentPage)]
pub fn histagent_page(_p: &Props) -> Html {
    html! {
        <div class="page histagent-page" data-testid="histagent-page">
            <h1>{ t("histagent.title") }</h1>
            <p>{ t("histagent.intro") }</p>

            <section>
                <h2>{ t("histagent.tools.title") }</h2>
                <ul>
                    <li>{ t("histagent.tools.li.ocr") }</li>
                    <li>{ t("histagent.tools.li.image") }</li>
                    <li>{ t("histagent.tools.li.translation") }</li>
                    <li>{ t("histagent.tools.li.literature") }</li>
                    <li>{ t("histagent.tools.li.search") }</li>
                </ul>
            </section>

            <figure>
                <img
                    src={asset_path("resource/figures/histagent_architecture.png")}
                    alt={t("histagent.architecture.img_alt")}
                />
                <figcaption>{ t("histagent.architecture.caption") }</figcaption>
            </figure>

            <section>
                <h2>{ t("histagent.results.title") }</h2>
                <p>{ t("histagent.results.text") }</p>
            </section>
        </div>
    }
}
