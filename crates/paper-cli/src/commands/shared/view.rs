//! Serializable views shared by command outputs.

use paper_core::entities::{AnalysisResult, Paper};
use paper_core::enums::WorkflowKind;
use serde::Serialize;

/// A displayed workflow result with its provenance.
#[derive(Debug, Serialize)]
pub struct ResultView<'a> {
    pub kind: WorkflowKind,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    /// History id when the result is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<&'a str>,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

impl<'a> ResultView<'a> {
    pub fn new(kind: WorkflowKind, result: &'a AnalysisResult, history_id: Option<&'a str>) -> Self {
        Self {
            kind,
            title: result.title(),
            source_link: result.source_link(),
            history_id,
            result,
        }
    }
}

/// One search hit as listed to the user.
#[derive(Debug, Serialize)]
pub struct PaperRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub authors: &'a [String],
    pub year: Option<&'a str>,
    pub source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

impl<'a> From<&'a Paper> for PaperRow<'a> {
    fn from(paper: &'a Paper) -> Self {
        Self {
            id: &paper.id,
            title: &paper.title,
            authors: &paper.authors,
            year: paper.year.as_deref(),
            source: &paper.source,
            url: paper.url.as_deref().or(paper.pdf_url.as_deref()),
        }
    }
}
