//! Local history slot location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Path of the JSON file holding past results. Empty selects the
    /// per-user data directory.
    #[serde(default)]
    pub path: String,
}

impl HistoryConfig {
    /// Resolve the slot path: the configured path, else
    /// `<data_dir>/pax/history.json`, else `.pax/history.json`.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.trim().is_empty() {
            return PathBuf::from(self.path.trim());
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".pax").join("history.json"),
            |dir| dir.join("pax").join("history.json"),
        )
    }
}
