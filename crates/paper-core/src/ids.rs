//! Time-derived identifiers for history entries.
//!
//! Ids are decimal millisecond Unix timestamps. When two entries are created in
//! the same millisecond (or the clock steps backwards) the new id is bumped to
//! one past the most recent id, so ids stay unique and strictly increasing
//! within a store.

use chrono::{DateTime, Utc};

/// Produce the id for an entry created at `now`, given the newest existing id.
///
/// A `latest` that is not a decimal timestamp is ignored.
#[must_use]
pub fn next_time_id(now: DateTime<Utc>, latest: Option<&str>) -> String {
    let candidate = now.timestamp_millis();
    let floor = latest
        .and_then(|id| id.parse::<i64>().ok())
        .map_or(i64::MIN, |last| last.saturating_add(1));
    candidate.max(floor).to_string()
}
