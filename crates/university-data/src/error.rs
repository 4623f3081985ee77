//! Error types for the university-data crate.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing or validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// The dataset contains no university records.
    #[error("dataset contains no university records")]
    Empty,

    /// A record violates a field constraint.
    #[error("invalid university record at index {index} (id {id}): {reason}")]
    InvalidRecord {
        /// Position of the record in the dataset array.
        index: usize,
        /// Identifier declared by the record.
        id: u32,
        /// Which constraint was violated.
        reason: String,
    },

    /// Two records share the same identifier.
    #[error("duplicate university id {id} at index {index}")]
    DuplicateId {
        /// Position of the second occurrence.
        index: usize,
        /// The repeated identifier.
        id: u32,
    },
}
