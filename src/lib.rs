//! Peppol UBL invoice and credit note viewer.
//!
//! Converts Peppol UBL XML documents to human-readable HTML by invoking a
//! platform-supplied XSLT engine with the reference stylesheet
//! (`render-billing-3.xsl`) and post-processing the output. The browser
//! counterpart lives in the `pepview-wasm` crate.

pub use pepview_core::{ConvertError, Converter, DEFAULT_STYLESHEET, locate_stylesheet};
pub use pepview_engine::{
    EngineError, LANGUAGE_PARAM, LanguageCode, SUPPORTED_LANGUAGES, StylesheetSource,
    TransformRequest, XmlSource, XsltEngine,
};
pub use pepview_html::{SMALL_SCREEN_OVERRIDE, postprocess};
pub use pepview_xsltproc::XsltprocEngine;
