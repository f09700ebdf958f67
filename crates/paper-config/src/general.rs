//! General application configuration.

use paper_core::enums::{MaxResults, SourceFilter, SynthesisType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Comma-separated topics sent with single-paper analyses when none are given.
    #[serde(default)]
    pub default_topics: String,

    /// Default paper index for searches.
    #[serde(default)]
    pub default_source: SourceFilter,

    /// Default result count for searches (5, 10, 15, or 20).
    #[serde(default)]
    pub default_max_results: MaxResults,

    /// Default synthesis flavor.
    #[serde(default)]
    pub default_synthesis_type: SynthesisType,
}
