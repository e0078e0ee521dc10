//! Rendering bridge: file selection to transformed view in an iframe.
//!
//! One user-selected file per event, no overlap: the transform is short and
//! synchronous, so a new selection simply replaces the prior view. The blob
//! URL backing the superseded view is revoked to avoid accumulation across
//! repeated selections.

use crate::engine::BrowserEngine;
use crate::error::{ViewerError, js_message};
use crate::fetch::fetch_text;
use pepview_engine::{LanguageCode, StylesheetSource, TransformRequest, XmlSource, XsltEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise, spawn_local};
use web_sys::{Blob, BlobPropertyBag, Element, HtmlIFrameElement, HtmlInputElement, Url};

struct ViewerState {
    frame_id: String,
    stylesheet_url: String,
    language: LanguageCode,
    /// Fetched once, then reused across renders.
    stylesheet_text: Option<String>,
    /// Object URL of the currently displayed view.
    blob_url: Option<String>,
}

/// The browser viewer: wires a file input and a print button to an iframe
/// that displays transformed invoices.
///
/// # Example
///
/// ```javascript
/// const viewer = new PeppolViewer('xmlFrame', '/render-billing-3.xsl');
/// viewer.attachFileInput('UploadInput');
/// viewer.attachPrintButton('PrintButton');
/// ```
#[wasm_bindgen]
pub struct PeppolViewer {
    state: Rc<RefCell<ViewerState>>,
}

#[wasm_bindgen]
impl PeppolViewer {
    /// Create a viewer targeting the iframe with the given element id,
    /// using the stylesheet served at `stylesheet_url` on the hosting
    /// origin.
    #[wasm_bindgen(constructor)]
    pub fn new(frame_id: &str, stylesheet_url: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewerState {
                frame_id: frame_id.to_string(),
                stylesheet_url: stylesheet_url.to_string(),
                language: LanguageCode::default(),
                stylesheet_text: None,
                blob_url: None,
            })),
        }
    }

    /// Set the language code bound into the stylesheet for subsequent
    /// renders (shipped translations: en, is, pl, se, sr).
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, code: &str) {
        self.state.borrow_mut().language = LanguageCode::new(code);
    }

    /// Transform raw XML text and display the result in the iframe.
    ///
    /// The returned Promise rejects on failure; the failure is also
    /// rendered into the frame so the user sees feedback either way.
    #[wasm_bindgen(js_name = renderXml)]
    pub fn render_xml(&self, xml: String) -> js_sys::Promise {
        let state = Rc::clone(&self.state);
        future_to_promise(async move {
            render(state, xml)
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(JsValue::from)
        })
    }

    /// Wire a `change` listener on a file input: the selected file is read
    /// as UTF-8 text and rendered. Call once per input element.
    #[wasm_bindgen(js_name = attachFileInput)]
    pub fn attach_file_input(&self, input_id: &str) -> Result<(), JsValue> {
        let input: HtmlInputElement = element(input_id)?
            .dyn_into()
            .map_err(|_| ViewerError::dom(format!("element #{input_id} is not an input")))?;

        let state = Rc::clone(&self.state);
        let reader = input.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            // Exactly one file per selection event.
            let Some(file) = reader.files().and_then(|files| files.get(0)) else {
                return;
            };
            let state = Rc::clone(&state);
            spawn_local(async move {
                match JsFuture::from(file.text()).await {
                    Ok(text) => {
                        let xml = text.as_string().unwrap_or_default();
                        if let Err(err) = render(state, xml).await {
                            web_sys::console::error_1(&JsValue::from(err));
                        }
                    }
                    Err(err) => web_sys::console::error_1(&err),
                }
            });
        });
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Wire a click listener that focuses the iframe's content window and
    /// invokes its print dialog. Call once, after the page has rendered.
    #[wasm_bindgen(js_name = attachPrintButton)]
    pub fn attach_print_button(&self, button_id: &str) -> Result<(), JsValue> {
        let button = element(button_id)?;
        let frame_id = self.state.borrow().frame_id.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Ok(frame) = frame(&frame_id) else { return };
            if let Some(window) = frame.content_window() {
                let _ = window.focus();
                let _ = window.print();
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Release the blob URL backing the current view.
    pub fn dispose(&self) {
        if let Some(url) = self.state.borrow_mut().blob_url.take() {
            let _ = Url::revoke_object_url(&url);
        }
    }
}

async fn render(state: Rc<RefCell<ViewerState>>, xml: String) -> Result<(), ViewerError> {
    match try_render(&state, &xml).await {
        Ok(()) => Ok(()),
        Err(err) => {
            // Surface every failure (fetch, parse, transform) in the frame
            // instead of failing silently.
            let _ = display(&state, &error_page(&err));
            Err(err)
        }
    }
}

async fn try_render(state: &Rc<RefCell<ViewerState>>, xml: &str) -> Result<(), ViewerError> {
    let (needs_fetch, url) = {
        let s = state.borrow();
        (s.stylesheet_text.is_none(), s.stylesheet_url.clone())
    };
    if needs_fetch {
        let text = fetch_text(&url).await?;
        state.borrow_mut().stylesheet_text = Some(text);
    }

    let html = {
        let s = state.borrow();
        let stylesheet = s.stylesheet_text.as_deref().unwrap_or_default();
        let request =
            TransformRequest::new(XmlSource::Text(xml), StylesheetSource::Text(stylesheet))
                .with_language(s.language.clone());
        BrowserEngine::new().transform(&request)?
    };

    display(state, &pepview_html::postprocess(&html))
}

fn display(state: &Rc<RefCell<ViewerState>>, html: &str) -> Result<(), ViewerError> {
    let frame_id = state.borrow().frame_id.clone();
    let frame = frame(&frame_id)?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(html));
    let options = BlobPropertyBag::new();
    options.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| ViewerError::dom(js_message(&e)))?;
    let url =
        Url::create_object_url_with_blob(&blob).map_err(|e| ViewerError::dom(js_message(&e)))?;
    frame.set_src(&url);

    // Release the superseded view's URL.
    if let Some(old) = state.borrow_mut().blob_url.replace(url) {
        let _ = Url::revoke_object_url(&old);
    }
    Ok(())
}

fn error_page(err: &ViewerError) -> String {
    format!(
        "<!DOCTYPE html><html><body><h2>Unable to display document</h2><pre>{}</pre></body></html>",
        escape_text(err.message())
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn element(id: &str) -> Result<Element, ViewerError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| ViewerError::dom(format!("element #{id} not found")))
}

fn frame(frame_id: &str) -> Result<HtmlIFrameElement, ViewerError> {
    element(frame_id)?
        .dyn_into()
        .map_err(|_| ViewerError::dom(format!("element #{frame_id} is not an iframe")))
}
