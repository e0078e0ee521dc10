//! Error handling for the browser viewer.
//!
//! Converts pipeline errors into JavaScript-friendly `Error` objects
//! carrying a `code` property.

use pepview_engine::EngineError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for JavaScript/TypeScript consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Source XML or stylesheet is not well-formed
    Parse,
    /// The XSLT transformation was rejected or failed mid-evaluation
    Transform,
    /// Fetching the stylesheet from the hosting origin failed
    Fetch,
    /// A DOM element or API the viewer relies on is missing
    Dom,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Parse => "PARSE_ERROR",
            ErrorCode::Transform => "TRANSFORM_ERROR",
            ErrorCode::Fetch => "FETCH_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it converts into a real JavaScript `Error`
/// object instead.
#[derive(Debug)]
pub struct ViewerError {
    code: ErrorCode,
    message: String,
}

impl ViewerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Fetch, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl From<EngineError> for ViewerError {
    fn from(err: EngineError) -> Self {
        let code = match &err {
            EngineError::Parse(_) => ErrorCode::Parse,
            EngineError::Transform(_) => ErrorCode::Transform,
            EngineError::NotFound(_) | EngineError::Unavailable(_) | EngineError::Io(_) => {
                ErrorCode::Unknown
            }
        };
        Self::new(code, err.to_string())
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        let _ = js_sys::Reflect::set(
            &js_error,
            &JsValue::from_str("code"),
            &JsValue::from_str(err.code.as_str()),
        );
        js_error.into()
    }
}

/// Extracts a readable message from an arbitrary JavaScript exception.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
