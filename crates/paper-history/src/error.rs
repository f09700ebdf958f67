//! History persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the history slot.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem operation on the slot failed.
    #[error("history I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry list could not be encoded.
    #[error("failed to encode history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The slot refused the operation (quota exceeded, storage disabled).
    #[error("history storage unavailable: {0}")]
    Unavailable(String),
}
