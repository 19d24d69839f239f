//! Error types for loading tables and documents.

use std::{io, path::PathBuf};

use econ_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when loading corpus files or building tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a delimited file.
    #[error("failed to parse table {path}: {source}")]
    Csv {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Failed to parse a JSON document.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The file extension does not map to a known document kind.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// A row does not have one value per column.
    #[error("row has {actual} values but the table has {expected} columns")]
    RowWidth {
        /// Number of columns in the table.
        expected: usize,
        /// Number of values in the offending row.
        actual: usize,
    },

    /// Failed to walk a collection directory.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },

    /// Collection patterns could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
