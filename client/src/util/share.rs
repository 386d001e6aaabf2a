//! Native share sheet with clipboard fallback.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is swallowed and logged at debug level. A dismissed share
//! sheet reports [`ShareOutcome::Cancelled`] and does not fall back to the
//! clipboard; any other share failure tries the clipboard next.

use catalog::share::ShareOutcome;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Call `target.method(arg)` and await the returned promise.
#[cfg(feature = "hydrate")]
async fn call_async(target: &JsValue, method: &str, arg: &JsValue) -> Result<JsValue, JsValue> {
    let func: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let promise: js_sys::Promise = func.call1(target, arg)?.dyn_into()?;
    wasm_bindgen_futures::JsFuture::from(promise).await
}

#[cfg(feature = "hydrate")]
fn is_abort(err: &JsValue) -> bool {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "AbortError")
}

/// Offer `url` through the share sheet, else copy it to the clipboard.
pub async fn share_or_copy(title: &str, url: &str) -> ShareOutcome {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ShareOutcome::Unavailable;
        };
        let navigator: JsValue = window.navigator().into();

        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));
        match call_async(&navigator, "share", &data).await {
            Ok(_) => return ShareOutcome::Shared,
            Err(e) if is_abort(&e) => {
                log::debug!("share sheet dismissed");
                return ShareOutcome::Cancelled;
            }
            Err(e) => log::debug!("native share unavailable: {e:?}"),
        }

        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).unwrap_or(JsValue::UNDEFINED);
        match call_async(&clipboard, "writeText", &JsValue::from_str(url)).await {
            Ok(_) => ShareOutcome::Copied,
            Err(e) => {
                log::debug!("clipboard write failed: {e:?}");
                ShareOutcome::Unavailable
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, url);
        ShareOutcome::Unavailable
    }
}
