//! Address-bar helpers.

/// Current `location.origin`, e.g. `https://shop.example`. Empty on the server.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Rewrite the query string of the current entry without navigating or
/// adding a history entry. An empty `query` removes the `?`.
pub fn replace_query(path: &str, query: &str) {
    let url = catalog::query::href(path, query);
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::debug!("replaceState failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
