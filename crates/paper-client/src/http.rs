//! Shared HTTP response helpers for collaborator endpoints.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`CollaboratorError::Api`]) so endpoint modules stay
//! focused on request construction and response mapping.

use crate::error::CollaboratorError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`CollaboratorError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`CollaboratorError::Api`] with status code and
///   the body's `error` field (or the raw body when it has none).
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, CollaboratorError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(CollaboratorError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(CollaboratorError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Fail when a success payload still carries an `error` field.
pub fn reject_error_field(error: Option<String>) -> Result<(), CollaboratorError> {
    match error {
        Some(message) if !message.trim().is_empty() => Err(CollaboratorError::Backend(message)),
        _ => Ok(()),
    }
}

/// Extract the backend's `error` text from a JSON body, else the body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(ToString::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
