use crate::router::{Language, NavState};
use yew::prelude::*;

/// Image shown in the shared lightbox, if any.
#[derive(Clone, PartialEq, Eq)]
pub struct ModalImage {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: AttrValue,
}

/// Single authoritative holder of the navigation state.
///
/// The navigation callback is the only writer; every view reads.
#[derive(Clone)]
pub struct AppState {
    pub nav: UseStateHandle<NavState>,
    pub modal_image: UseStateHandle<Option<ModalImage>>,
}

/// Compute the first navigation state of a page load.
///
/// The fragment wins when it carries valid tokens; otherwise the language
/// comes from the browser-reported locale and the page defaults to home.
#[must_use]
pub fn initial_nav(raw_fragment: &str, browser_locale: Option<&str>) -> NavState {
    let language = browser_locale
        .map(Language::from_browser_locale)
        .unwrap_or(Language::En);
    NavState::parse(raw_fragment, language)
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        nav: use_state(|| {
            #[cfg(target_arch = "wasm32")]
            {
                let nav = initial_nav(
                    &crate::dom::location_fragment(),
                    crate::dom::browser_locale().as_deref(),
                );
                // The translation bundle must match before the first paint.
                crate::i18n::set_lang(nav.language.slug());
                nav
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                initial_nav("", None)
            }
        }),
        modal_image: use_state(|| None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Page;

    #[test]
    fn initial_nav_prefers_the_fragment() {
        let nav = initial_nav("#histbench_zh", Some("en-US"));
        assert_eq!(nav, NavState::new(Page::HistBench, Language::Zh));
    }

    #[test]
    fn initial_nav_falls_back_to_browser_language() {
        let nav = initial_nav("", Some("zh-CN"));
        assert_eq!(nav, NavState::new(Page::Home, Language::Zh));

        let nav = initial_nav("#submit", Some("zh-TW"));
        assert_eq!(nav, NavState::new(Page::Submit, Language::Zh));
    }

    #[test]
    fn initial_nav_defaults_to_english_home() {
        assert_eq!(
            initial_nav("", None),
            NavState::new(Page::Home, Language::En)
        );
    }
}
