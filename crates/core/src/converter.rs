//! One-shot XML-to-HTML conversion.

use crate::error::ConvertError;
use log::info;
use pepview_engine::{
    LanguageCode, StylesheetSource, TransformRequest, XmlSource, XsltEngine,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Converts Peppol UBL invoice/credit note XML to HTML.
///
/// Owns the engine backend, the resolved stylesheet path and the language
/// parameter; each `convert_*` call builds one [`TransformRequest`], runs
/// the engine and applies the output post-processing.
pub struct Converter {
    engine: Box<dyn XsltEngine>,
    stylesheet: PathBuf,
    language: LanguageCode,
}

impl Converter {
    pub fn new(engine: Box<dyn XsltEngine>, stylesheet: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            stylesheet: stylesheet.into(),
            language: LanguageCode::default(),
        }
    }

    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.language = language;
        self
    }

    pub fn stylesheet(&self) -> &Path {
        &self.stylesheet
    }

    /// Converts an XML file, writing the HTML beside it with the same name
    /// and an `.html` extension. Returns the output path.
    pub fn convert_file(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let output = input.with_extension("html");
        self.convert_file_to(input, &output)?;
        Ok(output)
    }

    /// Converts an XML file, writing the HTML to an explicit path. The
    /// output's parent directory is created when missing.
    pub fn convert_file_to(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::InputNotFound(input.to_path_buf()));
        }
        self.ensure_stylesheet()?;

        let request = TransformRequest::new(
            XmlSource::Path(input),
            StylesheetSource::Path(&self.stylesheet),
        )
        .with_language(self.language.clone());
        let html = pepview_html::postprocess(&self.engine.transform(&request)?);

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, html)?;
        info!(
            "converted {} -> {} ({})",
            input.display(),
            output.display(),
            self.engine.name()
        );
        Ok(())
    }

    /// Converts in-memory XML text, returning the HTML as a string.
    pub fn convert_str(&self, xml: &str) -> Result<String, ConvertError> {
        self.ensure_stylesheet()?;
        let request = TransformRequest::new(
            XmlSource::Text(xml),
            StylesheetSource::Path(&self.stylesheet),
        )
        .with_language(self.language.clone());
        let html = self.engine.transform(&request)?;
        Ok(pepview_html::postprocess(&html))
    }

    fn ensure_stylesheet(&self) -> Result<(), ConvertError> {
        if !self.stylesheet.is_file() {
            return Err(ConvertError::StylesheetNotFound(self.stylesheet.clone()));
        }
        Ok(())
    }
}
