//! Same-origin text fetching for the stylesheet resource.

use crate::error::{ViewerError, js_message};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches a URL from the hosting origin and returns its body as text.
pub(crate) async fn fetch_text(url: &str) -> Result<String, ViewerError> {
    let window =
        web_sys::window().ok_or_else(|| ViewerError::dom("no window object available"))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ViewerError::fetch(format!("GET {url}: {}", js_message(&e))))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ViewerError::fetch(format!("GET {url}: not a Response")))?;

    if !response.ok() {
        return Err(ViewerError::fetch(format!(
            "GET {url}: HTTP {}",
            response.status()
        )));
    }

    let text_promise = response
        .text()
        .map_err(|e| ViewerError::fetch(js_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| ViewerError::fetch(js_message(&e)))?;
    text.as_string()
        .ok_or_else(|| ViewerError::fetch(format!("GET {url}: body is not text")))
}
