//! Typed payloads returned by the analysis backend.
//!
//! Every field the backend may omit is optional here; semantic requirements
//! (a summary must be present, an `error` field means failure) are enforced by
//! the result adapter, not by deserialization.

use paper_core::entities::{Citations, Paper, PaperAnalysis, SourceInfo, resolve_paper_id};
use paper_core::enums::WorkflowKind;
use paper_core::lenient;
use serde::Deserialize;

/// Response to an upload, URL, or DOI analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_info: Option<SourceInfo>,
    #[serde(default)]
    pub citations: Option<Citations>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub error: Option<String>,
}

/// Response to a cross-paper synthesis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SynthesisPayload {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub synthesis: Option<String>,
    #[serde(default)]
    pub paper_analyses: Vec<PaperAnalysis>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub common_themes: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub conflicting_findings: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub synthesis_type: Option<String>,
    #[serde(default)]
    pub total_papers: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub audio: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub error: Option<String>,
}

/// A successful collaborator response, one variant per workflow kind.
#[derive(Debug, Clone)]
pub enum CollaboratorPayload {
    Upload(AnalysisPayload),
    Url(AnalysisPayload),
    Doi(AnalysisPayload),
    Synthesis(SynthesisPayload),
}

impl CollaboratorPayload {
    #[must_use]
    pub const fn kind(&self) -> WorkflowKind {
        match self {
            Self::Upload(_) => WorkflowKind::Upload,
            Self::Url(_) => WorkflowKind::Url,
            Self::Doi(_) => WorkflowKind::Doi,
            Self::Synthesis(_) => WorkflowKind::Synthesis,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub error: Option<String>,
}

/// One search hit as emitted by the backend, before id resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PaperRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub year: Option<String>,
    /// arXiv publication timestamp (`2023-05-01T17:59:59Z`).
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pdf_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub paper_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub arxiv_id: Option<String>,
}

impl From<PaperRecord> for Paper {
    fn from(record: PaperRecord) -> Self {
        let id = resolve_paper_id(
            record.paper_id.as_deref(),
            record.arxiv_id.as_deref(),
            &record.title,
        );
        let year = record.year.or_else(|| {
            record
                .published
                .as_deref()
                .and_then(|p| p.get(..4))
                .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
                .map(ToString::to_string)
        });
        Self {
            id,
            title: record.title,
            authors: record.authors,
            summary: record.summary,
            year,
            venue: record.venue,
            url: record.url,
            pdf_url: record.pdf_url,
            source: record.source,
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    /// Whether the backend's data directory exists.
    #[serde(default)]
    pub data_directory: Option<bool>,
    /// Number of narrated audio files the backend currently stores.
    #[serde(default)]
    pub audio_files: Option<u64>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
