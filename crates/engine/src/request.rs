//! The single conceptual entity of the pipeline: one transformation request.

use crate::language::LanguageCode;
use std::path::Path;

/// Source XML, either on disk or already in memory.
#[derive(Debug, Clone, Copy)]
pub enum XmlSource<'a> {
    Path(&'a Path),
    Text(&'a str),
}

/// Stylesheet reference, either on disk or already in memory.
///
/// Backends resolve `document()` references relative to the stylesheet's
/// location, so the path form is preferred wherever a filesystem exists.
#[derive(Debug, Clone, Copy)]
pub enum StylesheetSource<'a> {
    Path(&'a Path),
    Text(&'a str),
}

/// One transformation request: constructed per invocation, consumed once.
///
/// There is no cache and no shared state between requests; one request
/// produces one output.
#[derive(Debug, Clone)]
pub struct TransformRequest<'a> {
    pub source: XmlSource<'a>,
    pub stylesheet: StylesheetSource<'a>,
    pub language: LanguageCode,
}

impl<'a> TransformRequest<'a> {
    pub fn new(source: XmlSource<'a>, stylesheet: StylesheetSource<'a>) -> Self {
        Self {
            source,
            stylesheet,
            language: LanguageCode::default(),
        }
    }

    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.language = language;
        self
    }
}
