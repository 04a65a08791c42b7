//! Bidirectional synchronization between the location fragment and the
//! navigation state.
//!
//! Transitions are synchronous within one event-loop turn. Rewriting the
//! fragment after a navigation fires the browser's `hashchange` event; the
//! rewritten fragment parses back to the already-applied state, so
//! [`resolve_navigation`] absorbs the echo and no second render happens.

use crate::router::{Language, NavState, Page};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// No-op guard: `Some(target)` only when the target differs from the
/// current state.
#[must_use]
pub fn resolve_navigation(current: NavState, target: NavState) -> Option<NavState> {
    (target != current).then_some(target)
}

/// Target of a navigation link carrying a page marker. Page links never
/// change the language.
#[must_use]
pub const fn page_link_target(current: NavState, page: Page) -> NavState {
    NavState::new(page, current.language)
}

/// Target of a language-switcher link. Language links never change the
/// page.
#[must_use]
pub const fn language_link_target(current: NavState, language: Language) -> NavState {
    NavState::new(current.page, language)
}

/// Decide the transition for a raw `hashchange` fragment. `None` means
/// the event is an echo of our own rewrite or otherwise a no-op.
#[must_use]
pub fn fragment_change_target(current: NavState, raw_fragment: &str) -> Option<NavState> {
    resolve_navigation(current, NavState::parse(raw_fragment, current.language))
}

/// The single navigation entry point.
///
/// On a detected change the state store is updated (triggering a full
/// re-render; the fragment rewrite follows in [`use_fragment_sync`]).
/// Scroll position resets to the top whether or not anything changed, so
/// clicking the active nav link still scrolls up.
#[must_use]
pub fn navigation_callback(nav: &UseStateHandle<NavState>) -> Callback<NavState> {
    let handle = nav.clone();
    Callback::from(move |target: NavState| {
        let current = *handle;
        if let Some(next) = resolve_navigation(current, target) {
            if next.language != current.language {
                crate::i18n::set_lang(next.language.slug());
            }
            handle.set(next);
        }
        #[cfg(target_arch = "wasm32")]
        crate::dom::scroll_to_top();
    })
}

/// Keep the visible fragment equal to the canonical serialization of the
/// current state. Covers both the first-load canonicalization and the
/// rewrite after each user navigation.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_fragment_sync(nav: &UseStateHandle<NavState>) {
    use_effect_with(**nav, |state| {
        let canonical = state.fragment();
        if crate::dom::location_fragment() != format!("#{canonical}") {
            crate::dom::set_location_fragment(&canonical);
        }
    });
}

/// Feed `hashchange` events (back/forward navigation, manual URL edits)
/// back into the state store. A detected change applies the state and
/// resets the scroll position, the same as a nav-link click; echoes of
/// our own rewrites are absorbed by the no-op guard. The listener is
/// re-registered with a fresh snapshot whenever the state changes.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_hash_listener(nav: &UseStateHandle<NavState>) {
    let handle = nav.clone();
    use_effect_with(**nav, move |state| {
        let state = *state;
        let closure = Closure::<dyn Fn()>::new(move || {
            if let Some(next) = fragment_change_target(state, &crate::dom::location_fragment()) {
                if next.language != state.language {
                    crate::i18n::set_lang(next.language.slug());
                }
                handle.set(next);
                crate::dom::scroll_to_top();
            }
        });
        let window = crate::dom::window();
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        move || {
            let _ = crate::dom::window()
                .remove_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }
    });
}

/// Track document-level metadata: `<html lang>` and the document title,
/// using the page-specific title key with the site title as fallback.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_document_metadata(nav: &UseStateHandle<NavState>) {
    use_effect_with(**nav, |state| {
        let document = crate::dom::document();
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", state.language.slug());
        }
        let title_key = state.page.title_key();
        let title = crate::i18n::t(title_key);
        let title = if title == title_key {
            crate::i18n::t("site.title")
        } else {
            title
        };
        document.set_title(&title);
    });
}
