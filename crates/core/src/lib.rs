//! Conversion pipeline tying an [`XsltEngine`](pepview_engine::XsltEngine)
//! backend to the output post-processor.
//!
//! - [`locator`]: resolves the reference stylesheet path from configuration
//!   with a documented fallback order
//! - [`converter`]: one-shot XML-to-HTML conversion (file or in-memory)

mod converter;
mod error;
pub mod locator;

pub use converter::Converter;
pub use error::ConvertError;
pub use locator::{DEFAULT_STYLESHEET, STYLESHEET_DIR, locate_stylesheet};
