//! Codify error types.
//!
//! All errors are typed and provide root cause information.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Codify operations.
#[derive(Error, Debug)]
pub enum CodifyError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// SQLite backend error. Aborts the current document's ingestion;
    /// the per-document transaction rolls back any partial writes.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A raw document is missing a required top-level header field.
    /// The document is skipped and ingestion continues with the next one.
    #[error("Malformed document '{section}': {reason}")]
    MalformedDocument {
        /// The section number of the offending document, if it had one.
        section: String,
        /// What was missing or wrong.
        reason: String,
    },

    /// A structural unit carried an empty number or label. This is the
    /// designed tolerance for dangling references to renumbered or
    /// repealed units: the caller skips the node instead of failing
    /// the whole document.
    #[error("Invalid structural unit: {reason}")]
    InvalidStructuralUnit {
        /// Why the unit could not be resolved.
        reason: String,
    },

    /// An extraction step was handed empty text. Non-fatal.
    #[error("No text supplied for extraction")]
    NoText,

    /// The definition extractor found no defined terms. Non-fatal.
    #[error("No definitions found in text")]
    NoDefinitionsFound,

    /// A raw document file could not be deserialized.
    #[error("Invalid document JSON in {path}: {message}")]
    InvalidDocumentJson {
        /// The file that failed to deserialize.
        path: PathBuf,
        /// The deserialization error message.
        message: String,
    },

    /// A jurisdiction profile failed to load or validate.
    #[error("Invalid jurisdiction profile: {message}")]
    InvalidProfile {
        /// The validation error message.
        message: String,
    },

    /// A scanning regex failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for CodifyError {
    fn from(err: std::io::Error) -> Self {
        CodifyError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for Codify operations.
pub type Result<T> = std::result::Result<T, CodifyError>;
