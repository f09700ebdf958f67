use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::result::AnalysisResult;
use crate::enums::WorkflowKind;
use crate::ids;

/// A persisted snapshot of a successful result plus its provenance.
///
/// Entries are never mutated after creation; the history store only reads or
/// evicts them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique, time-derived id (see [`ids::next_time_id`]).
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    pub title: String,
    #[serde(rename = "source")]
    pub source_label: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl HistoryEntry {
    /// Snapshot `result` as produced by a workflow of `kind` at `now`.
    ///
    /// `latest_id` is the id of the newest entry already in the store.
    #[must_use]
    pub fn new(
        kind: WorkflowKind,
        result: AnalysisResult,
        now: DateTime<Utc>,
        latest_id: Option<&str>,
    ) -> Self {
        Self {
            id: ids::next_time_id(now, latest_id),
            kind,
            title: result.title().to_string(),
            source_label: kind.source_label().to_string(),
            timestamp: now,
            result,
        }
    }

    /// Coarse age of the entry relative to `now` ("Just now", "3 hours ago").
    #[must_use]
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let hours = (now - self.timestamp).num_hours();
        if hours < 1 {
            return "Just now".to_string();
        }
        if hours < 24 {
            return format!("{hours} hour{} ago", if hours > 1 { "s" } else { "" });
        }
        let days = hours / 24;
        format!("{days} day{} ago", if days > 1 { "s" } else { "" })
    }
}
