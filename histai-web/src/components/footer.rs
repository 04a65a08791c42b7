use crate::config::{DATASET_LINK, GITHUB_LINK, PAPER_LINK};
use crate::i18n::tr;
use crate::router::Language;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
}

fn current_year() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        format!("{}", js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().format("%Y").to_string()
    }
}

#[function_component(Footer)]
pub fn footer(_p: &Props) -> Html {
    let year = current_year();
    let mut args = BTreeMap::new();
    args.insert("year", year.as_str());

    html! {
        <footer>
            <div class="container">
                <p>{ tr("footer.copyright", Some(&args)) }</p>
                <p>
                    <a href={GITHUB_LINK} target="_blank" rel="noopener noreferrer">
                        { crate::i18n::t("footer.link.github") }
                    </a>
                    { " | " }
                    <a href={PAPER_LINK} target="_blank" rel="noopener noreferrer">
                        { crate::i18n::t("footer.link.paper") }
                    </a>
                    { " | " }
                    <a href={DATASET_LINK} target="_blank" rel="noopener noreferrer">
                        { crate::i18n::t("footer.link.dataset") }
                    </a>
                </p>
            </div>
        </footer>
    }
}
