//! # paper-history
//!
//! Bounded, most-recent-first record of successful analyses.
//!
//! The whole history is persisted as a single JSON array in one durable slot
//! (a file in production, memory in tests). Persistence is best-effort: read
//! and write failures are logged and the in-memory list remains authoritative
//! for the rest of the run.

pub mod error;
pub mod slot;
pub mod store;

pub use error::HistoryError;
pub use slot::{FileSlot, HistorySlot, MemorySlot};
pub use store::{HISTORY_CAPACITY, HistoryStore};
