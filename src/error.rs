//! Error types for the structured data library.

use thiserror::Error;

/// Result type alias for structured data operations
pub type Result<T> = std::result::Result<T, StructuredDataError>;

/// Errors that can occur while reading structured data.
///
/// Extraction itself never fails: malformed JSON-LD blocks and
/// unresolvable URLs degrade silently to missing items or raw values.
/// Only obtaining the document can go wrong.
#[derive(Error, Debug)]
pub enum StructuredDataError {
    /// Failed to read an HTML file from disk
    #[error("Failed to read HTML file: {0}")]
    Io(#[from] std::io::Error),
}
