//! Error taxonomy shared by all engine backends.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for XSLT transformation operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A file declared as a path in the request does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The source document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The stylesheet is malformed or the engine failed mid-evaluation
    /// (e.g. an unresolved external reference).
    #[error("XSLT transform error: {0}")]
    Transform(String),

    /// No engine can service this request on the current platform.
    #[error("engine unavailable: {0}")]
    Unavailable(String),

    /// I/O failure while talking to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
