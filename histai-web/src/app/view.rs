use crate::app::state::{AppState, ModalImage};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::image_modal::ImageModal;
use crate::pages;
use crate::router::{NavState, Page};
use yew::prelude::*;

/// Render the whole application for the current navigation state:
/// header, exactly one page view, footer, and the shared image lightbox.
///
/// The `Page` match is exhaustive, so an unmapped page cannot reach the
/// renderer.
pub fn render_app(state: &AppState, on_navigate: &Callback<NavState>) -> Html {
    let nav = *state.nav;
    let language = nav.language;

    let open_image = {
        let modal = state.modal_image.clone();
        Callback::from(move |image: ModalImage| modal.set(Some(image)))
    };
    let close_image = {
        let modal = state.modal_image.clone();
        Callback::from(move |()| modal.set(None))
    };

    let content = match nav.page {
        Page::Home => html! { <pages::home::HomePage {language} on_navigate={on_navigate.clone()} /> },
        Page::HistBench => html! {
            <pages::histbench::HistBenchPage {language} on_open_image={open_image.clone()} />
        },
        Page::HistAgent => html! { <pages::histagent::HistAgentPage {language} /> },
        Page::Impact => html! { <pages::impact::ImpactPage {language} /> },
        Page::Authors => html! { <pages::authors::AuthorsPage {language} /> },
        Page::Submit => html! {
            <pages::submit::SubmitPage {language} on_open_image={open_image.clone()} />
        },
    };

    html! {
        <>
            <Header {nav} on_navigate={on_navigate.clone()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="status-live" class="sr-only" aria-live="polite"></div>
                { content }
            </main>
            <Footer {language} />
            <ImageModal image={(*state.modal_image).clone()} on_close={close_image} />
        </>
    }
}
