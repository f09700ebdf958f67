//! The history store.

use paper_core::entities::HistoryEntry;
use serde_json::Value;

use crate::error::HistoryError;
use crate::slot::HistorySlot;

/// Maximum number of entries retained; older entries are evicted.
pub const HISTORY_CAPACITY: usize = 50;

/// Most-recent-first list of completed analyses, mirrored to a slot.
///
/// Invariants: at most [`HISTORY_CAPACITY`] entries; index 0 is the newest.
pub struct HistoryStore<S: HistorySlot> {
    slot: S,
    entries: Vec<HistoryEntry>,
}

impl<S: HistorySlot> HistoryStore<S> {
    /// Load the persisted history from `slot`.
    ///
    /// Never fails: an unreadable or unparsable slot yields an empty history,
    /// and individual malformed entries are skipped. Problems are logged.
    pub fn open(slot: S) -> Self {
        let entries = match slot.read() {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "history slot unreadable; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(entries = entries.len(), "history loaded");
        Self { slot, entries }
    }

    /// Entries newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Id of the newest entry, used to keep new ids unique.
    #[must_use]
    pub fn latest_id(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.id.as_str())
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Insert `entry` at the front, evict past capacity, and persist.
    ///
    /// The in-memory list is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the list could not be written to the slot.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        tracing::debug!(id = %entry.id, kind = %entry.kind, "recording history entry");
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()
    }

    /// Remove every entry and delete the persisted value.
    ///
    /// The in-memory list is emptied even when the slot cannot be cleared.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the slot could not be removed.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.slot.remove()
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.slot.write(&raw)
    }
}

fn parse_entries(raw: &str) -> Vec<HistoryEntry> {
    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(error) => {
            tracing::warn!(%error, "history slot is not a JSON array; starting empty");
            return Vec::new();
        }
    };
    let mut entries: Vec<HistoryEntry> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed history entry");
                None
            }
        })
        .collect();
    entries.truncate(HISTORY_CAPACITY);
    entries
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use paper_core::entities::{AnalysisResult, SourceInfo};
    use paper_core::enums::WorkflowKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::slot::MemorySlot;

    fn entry(n: i64, latest: Option<&str>) -> HistoryEntry {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(n);
        let result = AnalysisResult {
            summary_text: format!("summary {n}"),
            classification_label: "Physics".into(),
            audio_reference: String::new(),
            source_info: Some(SourceInfo {
                title: format!("Paper {n}"),
                ..SourceInfo::default()
            }),
            citations: None,
        };
        HistoryEntry::new(WorkflowKind::Url, result, now, latest)
    }

    fn fill(store: &mut HistoryStore<Arc<MemorySlot>>, count: i64) {
        for n in 0..count {
            let next = entry(n, store.latest_id());
            store.append(next).unwrap();
        }
    }

    #[test]
    fn empty_slot_opens_empty() {
        let store = HistoryStore::open(MemorySlot::new());
        assert!(store.is_empty());
        assert!(store.latest_id().is_none());
    }

    #[test]
    fn append_is_newest_first_and_persisted() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = HistoryStore::open(Arc::clone(&slot));
        fill(&mut store, 3);

        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Paper 2", "Paper 1", "Paper 0"]);

        let reopened = HistoryStore::open(Arc::clone(&slot));
        assert_eq!(reopened.entries(), store.entries());
    }

    #[test]
    fn capacity_evicts_oldest() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = HistoryStore::open(Arc::clone(&slot));
        fill(&mut store, 51);

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.entries()[0].title, "Paper 50");
        assert_eq!(store.entries()[49].title, "Paper 1");
        assert!(store.entries().iter().all(|e| e.title != "Paper 0"));

        let persisted: Vec<Value> = serde_json::from_str(&slot.contents().unwrap()).unwrap();
        assert_eq!(persisted.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = HistoryStore::open(slot);
        let first = entry(0, store.latest_id());
        store.append(first).unwrap();
        let second = entry(0, store.latest_id());
        store.append(second).unwrap();
        assert_ne!(store.entries()[0].id, store.entries()[1].id);
    }

    #[test]
    fn corrupt_slot_opens_empty() {
        let store = HistoryStore::open(MemorySlot::with_contents("{not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let good = serde_json::to_value(entry(1, None)).unwrap();
        let raw = serde_json::to_string(&vec![
            good,
            serde_json::json!({"id": "x"}),
            serde_json::json!(42),
        ])
        .unwrap();
        let store = HistoryStore::open(MemorySlot::with_contents(raw));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].title, "Paper 1");
    }

    #[test]
    fn oversized_slot_is_truncated_on_load() {
        let mut entries = Vec::new();
        let mut latest: Option<String> = None;
        for n in 0..60 {
            let next = entry(n, latest.as_deref());
            latest = Some(next.id.clone());
            entries.insert(0, next);
        }
        let raw = serde_json::to_string(&entries).unwrap();
        let store = HistoryStore::open(MemorySlot::with_contents(raw));
        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.entries()[0].title, "Paper 59");
    }

    #[test]
    fn write_failure_keeps_in_memory_entry() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = HistoryStore::open(Arc::clone(&slot));
        slot.set_fail_writes(true);

        let result = store.append(entry(0, None));
        assert!(matches!(result, Err(HistoryError::Unavailable(_))));
        assert_eq!(store.len(), 1);
        assert!(slot.contents().is_none());
    }

    #[test]
    fn clear_empties_memory_and_slot() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = HistoryStore::open(Arc::clone(&slot));
        fill(&mut store, 2);
        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(slot.contents().is_none());
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = HistoryStore::open(MemorySlot::new());
        let first = entry(7, None);
        let id = first.id.clone();
        store.append(first).unwrap();
        assert_eq!(store.get(&id).map(|e| e.title.as_str()), Some("Paper 7"));
        assert!(store.get("missing").is_none());
    }
}
