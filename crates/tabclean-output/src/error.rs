//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while storing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Delimiter is not a single ASCII character.
    #[error("delimiter must be a single ASCII character, got {delimiter:?}")]
    InvalidDelimiter { delimiter: char },

    /// The destination directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file next to the destination could not be created or synced.
    #[error("failed to {operation} temporary file in {path}: {source}")]
    TempFile {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing records failed.
    #[error("failed to write {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The finished file could not be moved over the destination.
    #[error("failed to move output into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered output was not valid UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
