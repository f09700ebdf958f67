//! Domain records shared across pax crates.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation of the persisted history layout.

mod history;
mod paper;
mod result;

pub use history::HistoryEntry;
pub use paper::{Paper, resolve_paper_id};
pub use result::{
    AnalysisResult, Citations, DEFAULT_TITLE, ERROR_CLASSIFICATION, PaperAnalysis, SourceInfo,
};
