//! XsltEngine trait for abstracting XSLT transformation backends.
//!
//! This crate defines the capability interface that conversion code programs
//! against, so the same pipeline runs on top of different concrete engines:
//!
//! - `XsltprocEngine` (pepview-xsltproc): drives the platform `xsltproc`
//!   binary on native targets
//! - `BrowserEngine` (pepview-wasm): drives the browser's `XSLTProcessor`
//!
//! An engine exposes a single operation: given a [`TransformRequest`]
//! (source XML, stylesheet reference, language parameter), produce HTML text
//! or fail with an [`EngineError`].

mod error;
mod language;
mod request;

pub use error::EngineError;
pub use language::{LANGUAGE_PARAM, LanguageCode, SUPPORTED_LANGUAGES};
pub use request::{StylesheetSource, TransformRequest, XmlSource};

/// A trait for XSLT transformation engines.
///
/// Implementations load the stylesheet with external-document resolution
/// enabled (so `document()` references resolve relative to the stylesheet's
/// own location) and with embedded scripting disabled, and bind exactly one
/// external parameter: the language code under [`LANGUAGE_PARAM`].
///
/// Not every backend supports every source shape; a backend that cannot
/// service a request (e.g. a file path in the browser) fails with
/// [`EngineError::Unavailable`] rather than guessing.
pub trait XsltEngine {
    /// Transform the request's source XML with its stylesheet, producing
    /// HTML markup text.
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, EngineError>;

    /// A short name identifying the backend, for diagnostics.
    fn name(&self) -> &'static str;
}
