//! Error types for outline extraction.
//!
//! Only genuinely exceptional conditions live here: an input that cannot be
//! read, an output that cannot be written, and JSON or configuration failures.
//! Structural anomalies in the document itself are never errors; they are
//! reported as [`Diagnostic`](crate::structure::Diagnostic)s.

use std::path::PathBuf;

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or exporting an outline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input document could not be read (missing file, permissions, invalid UTF-8)
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured class or tag name does not form a valid CSS selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
