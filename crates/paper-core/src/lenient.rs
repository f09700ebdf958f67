//! Serde helpers for tolerant decoding of collaborator payloads.
//!
//! The backend emits some fields as either strings or numbers (`year` is
//! `"2023"` from one index and `2023` from another; `file_size` is a byte count
//! or `"Unknown"`) and sometimes sends `null` where a list is expected. Use with
//! `#[serde(default, deserialize_with = "lenient::...")]` on struct fields.
//!
//! # Example
//! ```ignore
//! use paper_core::lenient;
//!
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(default, deserialize_with = "lenient::string")]
//!     pub year: String,
//!
//!     #[serde(default, deserialize_with = "lenient::opt_string")]
//!     pub file_size: Option<String>,
//!
//!     #[serde(default, deserialize_with = "lenient::string_list")]
//!     pub authors: Vec<String>,
//! }
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Decode a string, number, or `null` into a `String` (`null` → empty).
///
/// # Errors
///
/// Fails only if the input is not valid JSON for the deserializer.
pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(scalar_to_string(Value::deserialize(d)?).unwrap_or_default())
}

/// Decode a string, number, or `null` into an `Option<String>`.
///
/// Empty strings decode as `None`.
///
/// # Errors
///
/// Fails only if the input is not valid JSON for the deserializer.
pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_string(Value::deserialize(d)?).filter(|s| !s.is_empty()))
}

/// Decode a list of strings, a single string, or `null`.
///
/// # Errors
///
/// Fails only if the input is not valid JSON for the deserializer.
pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        scalar => scalar_to_string(scalar).into_iter().collect(),
    })
}
