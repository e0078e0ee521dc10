//! Language codes bound into the stylesheet as an external parameter.

use std::fmt;

/// Name of the external stylesheet parameter carrying the language code.
pub const LANGUAGE_PARAM: &str = "languageCode";

/// Language codes the reference stylesheet ships label translations for.
///
/// This set is documentation, not validation: any other code is passed
/// through unchanged and the stylesheet decides its own fallback.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "is", "pl", "se", "sr"];

/// A short language code selecting which label translations the stylesheet
/// renders. Defaults to `"en"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default().as_str(), "en");
    }

    #[test]
    fn unsupported_codes_pass_through_unchanged() {
        let code = LanguageCode::new("xx-klingon");
        assert_eq!(code.as_str(), "xx-klingon");
        assert_eq!(code.to_string(), "xx-klingon");
    }
}
