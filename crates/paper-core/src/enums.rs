//! Workflow kinds, controller states, and search/synthesis options.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `WorkflowState` provides `allowed_next_states()` so the controller can
//! enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// WorkflowKind
// ---------------------------------------------------------------------------

/// One of the four user-initiated analysis paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    Upload,
    Url,
    Doi,
    Synthesis,
}

impl WorkflowKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Url => "url",
            Self::Doi => "doi",
            Self::Synthesis => "synthesis",
        }
    }

    /// Provenance label stored on history entries produced by this workflow.
    #[must_use]
    pub const fn source_label(self) -> &'static str {
        match self {
            Self::Upload => "Uploaded File",
            Self::Url => "URL Analysis",
            Self::Doi => "DOI Analysis",
            Self::Synthesis => "Cross-Paper Synthesis",
        }
    }

    /// Human-readable label used when listing history.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Upload => "Uploaded Paper",
            Self::Url => "URL Analysis",
            Self::Doi => "DOI Analysis",
            Self::Synthesis => "Cross-Paper Synthesis",
        }
    }

    /// Fixed summary text of the error result for this workflow.
    #[must_use]
    pub const fn error_summary(self) -> &'static str {
        match self {
            Self::Upload => "Error occurred while processing the uploaded file",
            Self::Url => "Error occurred while processing the paper",
            Self::Doi => "Error occurred while processing the DOI",
            Self::Synthesis => "Error occurred while synthesizing papers",
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowState
// ---------------------------------------------------------------------------

/// State of the workflow controller.
///
/// ```text
/// idle → analyzing → result → idle (reset)
/// idle → result (load from history)
/// result → result (load from history)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Idle,
    Analyzing,
    Result,
}

impl WorkflowState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Analyzing, Self::Result],
            Self::Analyzing => &[Self::Result],
            Self::Result => &[Self::Idle, Self::Result],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceFilter
// ---------------------------------------------------------------------------

/// Which paper index the search collaborator queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceFilter {
    #[default]
    Both,
    Arxiv,
    SemanticScholar,
}

impl SourceFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Arxiv => "arxiv",
            Self::SemanticScholar => "semantic_scholar",
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SynthesisType
// ---------------------------------------------------------------------------

/// Flavor of cross-paper synthesis requested from the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisType {
    #[default]
    Comprehensive,
    Comparative,
    Thematic,
}

impl SynthesisType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Comparative => "comparative",
            Self::Thematic => "thematic",
        }
    }
}

impl fmt::Display for SynthesisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaxResults
// ---------------------------------------------------------------------------

/// Result-count choices offered for a paper search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MaxResults {
    Five,
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl MaxResults {
    /// Every accepted count, ascending.
    pub const ALL: [Self; 4] = [Self::Five, Self::Ten, Self::Fifteen, Self::Twenty];

    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for MaxResults {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.count() == value)
            .ok_or_else(|| format!("max results must be one of 5, 10, 15, 20 (got {value})"))
    }
}

impl From<MaxResults> for u32 {
    fn from(value: MaxResults) -> Self {
        value.count()
    }
}

impl fmt::Display for MaxResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn analyzing_only_leads_to_result() {
        assert!(WorkflowState::Analyzing.can_transition_to(WorkflowState::Result));
        assert!(!WorkflowState::Analyzing.can_transition_to(WorkflowState::Idle));
        assert!(!WorkflowState::Analyzing.can_transition_to(WorkflowState::Analyzing));
    }

    #[test]
    fn idle_cannot_reset() {
        assert!(!WorkflowState::Idle.can_transition_to(WorkflowState::Idle));
    }

    #[test]
    fn result_cannot_start_new_request() {
        assert!(!WorkflowState::Result.can_transition_to(WorkflowState::Analyzing));
    }

    #[rstest]
    #[case(WorkflowKind::Upload, "\"upload\"")]
    #[case(WorkflowKind::Url, "\"url\"")]
    #[case(WorkflowKind::Doi, "\"doi\"")]
    #[case(WorkflowKind::Synthesis, "\"synthesis\"")]
    fn workflow_kind_serializes_snake_case(#[case] kind: WorkflowKind, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&kind).unwrap(), json);
        assert_eq!(kind.to_string(), json.trim_matches('"'));
    }

    #[test]
    fn source_filter_wire_values() {
        assert_eq!(SourceFilter::SemanticScholar.as_str(), "semantic_scholar");
        let parsed: SourceFilter = serde_json::from_str("\"arxiv\"").unwrap();
        assert_eq!(parsed, SourceFilter::Arxiv);
        assert_eq!(SourceFilter::default(), SourceFilter::Both);
    }

    #[rstest]
    #[case(5, MaxResults::Five)]
    #[case(10, MaxResults::Ten)]
    #[case(15, MaxResults::Fifteen)]
    #[case(20, MaxResults::Twenty)]
    fn max_results_accepts_offered_counts(#[case] raw: u32, #[case] expected: MaxResults) {
        assert_eq!(MaxResults::try_from(raw).unwrap(), expected);
        assert_eq!(expected.count(), raw);
    }

    #[test]
    fn max_results_rejects_other_counts() {
        assert!(MaxResults::try_from(7).is_err());
        assert!(serde_json::from_str::<MaxResults>("25").is_err());
        assert_eq!(serde_json::to_string(&MaxResults::Fifteen).unwrap(), "15");
    }
}
