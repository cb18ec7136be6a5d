//! Error types for indset-io.

use indset_grid::GridError;
use thiserror::Error;

/// Errors raised while reading or writing simulator files.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A line of a grid file could not be parsed — the typed counterpart of
    /// a malformed coordinate key.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("kind index {kind} on line {line} is outside the kind table")]
    UnknownKind { line: usize, kind: u16 },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
