use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SynthesisType, WorkflowKind};
use crate::lenient;

/// Classification label carried by every failed workflow.
pub const ERROR_CLASSIFICATION: &str = "Error";

/// Title used for history entries whose result has no source title.
pub const DEFAULT_TITLE: &str = "Research Paper";

/// The canonical, display-ready outcome of any workflow.
///
/// Serialized field names match the persisted history layout
/// (`summary`, `classification`, `audio`, `source_info`, `citations`).
///
/// Invariant: a result whose classification is [`ERROR_CLASSIFICATION`] has an
/// empty audio reference. Use [`AnalysisResult::error`] to build one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisResult {
    #[serde(rename = "summary", default, deserialize_with = "lenient::string")]
    pub summary_text: String,

    #[serde(rename = "classification", default, deserialize_with = "lenient::string")]
    pub classification_label: String,

    /// Reference to narrated audio; opaque to this layer, possibly empty.
    #[serde(rename = "audio", default, deserialize_with = "lenient::string")]
    pub audio_reference: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_info: Option<SourceInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Citations>,
}

impl AnalysisResult {
    /// The fixed error result for a failed workflow of the given kind.
    #[must_use]
    pub fn error(kind: WorkflowKind) -> Self {
        Self {
            summary_text: kind.error_summary().to_string(),
            classification_label: ERROR_CLASSIFICATION.to_string(),
            audio_reference: String::new(),
            source_info: None,
            citations: None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.classification_label == ERROR_CLASSIFICATION
    }

    /// Source title, or [`DEFAULT_TITLE`] when the result carries none.
    #[must_use]
    pub fn title(&self) -> &str {
        self.source_info
            .as_ref()
            .map(|info| info.title.trim())
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Link to the original paper: the source URL, else a doi.org resolver link.
    #[must_use]
    pub fn source_link(&self) -> Option<String> {
        let info = self.source_info.as_ref()?;
        if let Some(url) = info.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        info.doi
            .as_deref()
            .filter(|doi| !doi.is_empty())
            .map(|doi| format!("https://doi.org/{doi}"))
    }
}

/// Bibliographic metadata about the analyzed source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourceInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub authors: Vec<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub journal: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub filename: Option<String>,

    /// Date the source was fetched (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub access_date: String,

    /// Byte count or a label such as `"Unknown"`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub file_size: Option<String>,

    /// Set on synthesis results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis_type: Option<SynthesisType>,

    /// Set on synthesis results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_papers: Option<u32>,
}

/// Citation data attached to a result.
///
/// Single-paper results carry a format-keyed map (`apa`, `mla`, `chicago`,
/// `bibtex`); synthesis results carry the per-paper analyses and the themes
/// common to them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Citations {
    Synthesis {
        papers: Vec<PaperAnalysis>,
        #[serde(default)]
        common_themes: Vec<String>,
    },
    Formats(BTreeMap<String, String>),
}

impl Citations {
    /// Citation text for a format key such as `"apa"`.
    #[must_use]
    pub fn format(&self, key: &str) -> Option<&str> {
        match self {
            Self::Formats(map) => map.get(key).map(String::as_str),
            Self::Synthesis { .. } => None,
        }
    }
}

/// One paper's contribution to a cross-paper synthesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaperAnalysis {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub key_insights: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: String,
}
