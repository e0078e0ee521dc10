//! Browser-native XSLT engine backend.
//!
//! Implements the [`XsltEngine`] trait over the browser's `XSLTProcessor`,
//! so the rendering bridge stays agnostic to which concrete engine performs
//! the transformation. Both source and stylesheet must already be in-memory
//! text; there is no filesystem in the browser.

use crate::error::js_message;
use pepview_engine::{
    EngineError, LANGUAGE_PARAM, StylesheetSource, TransformRequest, XmlSource, XsltEngine,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomParser, SupportedType, XmlSerializer, XsltProcessor};

/// An [`XsltEngine`] backed by the browser's `XSLTProcessor`.
///
/// The browser resolves `document()` references itself, relative to the
/// stylesheet URL it was parsed from, and permits no embedded scripting.
#[derive(Debug, Default)]
pub struct BrowserEngine;

impl BrowserEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parses XML text, mapping the browser's in-band `<parsererror>`
    /// document onto [`EngineError::Parse`].
    fn parse_xml(text: &str, what: &str) -> Result<Document, EngineError> {
        let parser = DomParser::new()
            .map_err(|e| EngineError::Unavailable(js_message(&e)))?;
        let doc = parser
            .parse_from_string(text, SupportedType::ApplicationXml)
            .map_err(|e| EngineError::Parse(format!("{what}: {}", js_message(&e))))?;

        let errors = doc.get_elements_by_tag_name("parsererror");
        if let Some(node) = errors.item(0) {
            let detail = node.text_content().unwrap_or_default();
            return Err(EngineError::Parse(format!("{what}: {detail}")));
        }
        Ok(doc)
    }
}

impl XsltEngine for BrowserEngine {
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, EngineError> {
        let XmlSource::Text(xml) = request.source else {
            return Err(EngineError::Unavailable(
                "the browser engine transforms in-memory text only".to_string(),
            ));
        };
        let StylesheetSource::Text(xslt) = request.stylesheet else {
            return Err(EngineError::Unavailable(
                "the browser engine needs the stylesheet fetched as text".to_string(),
            ));
        };

        let source = Self::parse_xml(xml, "source document")?;
        let stylesheet = Self::parse_xml(xslt, "stylesheet")?;

        let processor = XsltProcessor::new()
            .map_err(|e| EngineError::Unavailable(js_message(&e)))?;
        processor
            .import_stylesheet(&stylesheet)
            .map_err(|e| EngineError::Transform(js_message(&e)))?;
        // Empty string is the null namespace for XSLT parameters.
        processor
            .set_parameter(
                "",
                LANGUAGE_PARAM,
                &JsValue::from_str(request.language.as_str()),
            )
            .map_err(|e| EngineError::Transform(js_message(&e)))?;

        let result = processor
            .transform_to_document(&source)
            .map_err(|e| EngineError::Transform(js_message(&e)))?;

        let serializer = XmlSerializer::new()
            .map_err(|e| EngineError::Unavailable(js_message(&e)))?;
        serializer
            .serialize_to_string(&result)
            .map_err(|e| EngineError::Transform(js_message(&e)))
    }

    fn name(&self) -> &'static str {
        "browser-xslt"
    }
}
