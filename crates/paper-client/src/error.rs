//! Collaborator error types.

use thiserror::Error;

/// Errors that can occur when talking to the analysis backend.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// HTTP transport error (connection refused, timeout, bad body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The payload's `error` text, or the raw response body.
        message: String,
    },

    /// Backend answered with a success status but reported an error in the payload.
    #[error("backend error: {0}")]
    Backend(String),

    /// A semantically required field was absent from a success response.
    #[error("response is missing required field '{0}'")]
    MissingField(&'static str),

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
