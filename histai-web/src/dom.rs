use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Headers, Request, RequestInit, Response, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Reset the viewport to the top of the document.
pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Current location fragment including the leading `#`, or an empty string.
#[must_use]
pub fn location_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

/// Rewrite the location fragment. `fragment` is given without the `#`.
pub fn set_location_fragment(fragment: &str) {
    let _ = window().location().set_hash(fragment);
}

/// Browser-reported locale, e.g. `zh-CN`.
#[must_use]
pub fn browser_locale() -> Option<String> {
    window().navigator().language()
}

/// POST a JSON body and return the parsed JSON response.
///
/// # Errors
/// Returns an error if the request cannot be constructed, the fetch fails,
/// the server answers with a non-success status, or the body is not JSON.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, body: &str) -> Result<JsValue, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    let resp_value = JsFuture::from(window().fetch_with_request(&request)).await?;
    let response = resp_value.dyn_into::<Response>()?;

    let json = JsFuture::from(response.json()?).await?;
    if response.ok() {
        Ok(json)
    } else {
        Err(json)
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
