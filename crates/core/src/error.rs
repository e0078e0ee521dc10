//! Error type for conversion operations.

use pepview_engine::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The source XML file does not exist.
    #[error("XML file not found: {0}")]
    InputNotFound(PathBuf),

    /// The stylesheet file does not exist. Raised before any transform
    /// attempt.
    #[error("XSLT file not found: {0}")]
    StylesheetNotFound(PathBuf),

    /// The engine rejected the request.
    #[error("transformation failed")]
    Engine(#[from] EngineError),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
