//! Error types for store operations and input validation.

use thiserror::Error;

/// Errors surfaced by the todo store.
///
/// A missing record is not an error: mutating operations report it as
/// `Ok(false)` so callers can distinguish "nothing matched" from a real
/// failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected caller input, e.g. an empty description.
    #[error("{0}")]
    Validation(String),

    /// The todo file or archive document could not be read or written.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),

    /// The todo file could not be decoded or encoded as CSV.
    #[error("storage: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
