use wasm_bindgen_test::*;
use yew::Renderer;

use histai_web::app::App;
use histai_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    histai_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc
        .query_selector("main#main")
        .expect("query main")
        .expect("main landmark exists");
    assert_eq!(skip.get_attribute("href").unwrap(), "#main");
    assert_eq!(main.id(), "main");
}

#[wasm_bindgen_test]
fn hashchange_driven_navigation_resets_scroll() {
    render_app();
    let win = web_sys::window().expect("window");
    win.location().set_hash("impact_en").expect("set hash");
    // Dispatch directly so the listener runs within this test body.
    let event = web_sys::Event::new("hashchange").expect("event");
    win.dispatch_event(&event).expect("dispatch");
    assert_eq!(win.scroll_y().expect("scroll position"), 0.0);
}

#[wasm_bindgen_test]
fn header_language_switcher_offers_both_languages() {
    render_app();
    let doc = dom::document();
    let switcher = doc
        .query_selector(".language-switcher")
        .expect("query switcher")
        .expect("switcher exists");
    let links = switcher.query_selector_all("a").expect("switcher links");
    assert_eq!(links.length(), 2);
}
