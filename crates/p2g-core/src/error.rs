//! Failure type of the sync interface.

use thiserror::Error;

/// Any failure raised while a sync is dispatched.
///
/// Callers at the HTTP boundary do not branch on the variant; they forward the
/// display text. Variants exist for logging and for the worker client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SyncError {
    /// Transport failure talking to the sync worker.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Sync worker answered with a non-success status.
    #[error("Sync worker returned {status}: {message}")]
    Worker { status: u16, message: String },

    /// Sync worker answered with a body that is not a sync result.
    #[error("Invalid sync worker response: {0}")]
    InvalidResponse(String),

    /// Worker client could not be constructed from configuration.
    #[error("Sync worker configuration error: {0}")]
    Config(String),

    /// Unclassified failure with message.
    #[error("{0}")]
    Unexpected(String),
}

/// Result type of a single sync invocation.
pub type SyncOutcome<T> = Result<T, SyncError>;

impl From<String> for SyncError {
    fn from(s: String) -> Self {
        SyncError::Unexpected(s)
    }
}

impl From<&str> for SyncError {
    fn from(s: &str) -> Self {
        SyncError::Unexpected(s.to_string())
    }
}
