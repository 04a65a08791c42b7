pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();

    routing::use_fragment_sync(&app_state.nav);
    routing::use_hash_listener(&app_state.nav);
    routing::use_document_metadata(&app_state.nav);

    let on_navigate = routing::navigation_callback(&app_state.nav);

    view::render_app(&app_state, &on_navigate)
}
