//! Browser viewer for Peppol UBL invoices and credit notes.
//!
//! The viewer takes XML text from a user-selected file, transforms it with
//! the reference stylesheet using the browser's own XSLT machinery
//! (`XSLTProcessor`), applies the same output post-processing as the native
//! CLI, and displays the result in an embedded `<iframe>` via a Blob object
//! URL.
//!
//! ## Module structure
//!
//! - [`engine`] - `BrowserEngine`, the `XsltProcessor`-backed implementation
//!   of the `XsltEngine` trait
//! - [`viewer`] - `PeppolViewer`, the rendering bridge plus upload and
//!   print-button wiring
//! - [`error`] - error type with JavaScript interop
//! - [`fetch`] - same-origin stylesheet fetching
//!
//! # Example
//!
//! ```javascript
//! import init, { PeppolViewer } from '@pepview/wasm';
//!
//! await init();
//!
//! const viewer = new PeppolViewer('xmlFrame', '/render-billing-3.xsl');
//! viewer.attachFileInput('UploadInput');
//! viewer.attachPrintButton('PrintButton');
//! ```

mod engine;
mod error;
mod fetch;
mod viewer;

pub use engine::BrowserEngine;
pub use error::ViewerError;
pub use viewer::PeppolViewer;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for readable errors in the browser console. Called
/// automatically by wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the pepview-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
