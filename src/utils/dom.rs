//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Read a localStorage item.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage item, returning `false` if storage is unavailable.
pub fn storage_set(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

/// Remove localStorage items; missing keys are ignored.
pub fn storage_remove(keys: &[&str]) {
    if let Some(storage) = local_storage() {
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get a query parameter of the current URL.
pub fn query_param(name: &str) -> Option<String> {
    let href = window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get(name)
}

/// Replace the current URL without adding to browser history.
///
/// Used to drop one-time parameters such as the OAuth `code`.
pub fn replace_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
    }
}

/// Navigate the tab to another page.
pub fn navigate(url: &str) -> bool {
    window().is_some_and(|w| w.location().set_href(url).is_ok())
}
