//! Normalization of collaborator payloads into [`AnalysisResult`].
//!
//! Every function here is pure. A payload that lacks a required field is
//! reported as a [`CollaboratorError`]; turning that into the displayed error
//! result is the controller's job.

use chrono::{Datelike, NaiveDate};
use paper_client::{AnalysisPayload, CollaboratorError, CollaboratorPayload, SynthesisPayload};
use paper_core::entities::{AnalysisResult, Citations, ERROR_CLASSIFICATION, SourceInfo};
use paper_core::requests::{SynthesisRequest, WorkflowRequest};

/// Journal label on synthesis results.
pub const SYNTHESIS_JOURNAL: &str = "Research Synthesis";

/// Sole author credited on synthesis results.
pub const SYNTHESIS_AUTHOR: &str = "AI Synthesis Engine";

/// Normalize the payload answering `request`.
///
/// `today` stamps the year and access date of synthesis results.
///
/// # Errors
///
/// Returns [`CollaboratorError::MissingField`] when a required field is absent
/// or the payload does not answer the request's kind, and
/// [`CollaboratorError::Backend`] when the payload carries an `error` field.
pub fn adapt(
    request: &WorkflowRequest,
    payload: CollaboratorPayload,
    today: NaiveDate,
) -> Result<AnalysisResult, CollaboratorError> {
    match (request, payload) {
        (WorkflowRequest::Synthesis(synthesis), CollaboratorPayload::Synthesis(payload)) => {
            adapt_synthesis(synthesis, payload, today)
        }
        (WorkflowRequest::Synthesis(_), _) => Err(CollaboratorError::MissingField("synthesis")),
        (_, CollaboratorPayload::Synthesis(_)) => Err(CollaboratorError::MissingField("summary")),
        (
            _,
            CollaboratorPayload::Upload(payload)
            | CollaboratorPayload::Url(payload)
            | CollaboratorPayload::Doi(payload),
        ) => adapt_analysis(payload),
    }
}

/// Map an upload, URL, or DOI payload.
///
/// # Errors
///
/// Fails when `summary` or `classification` is absent, when `error` is set,
/// or when the backend labels its own answer as an error.
pub fn adapt_analysis(payload: AnalysisPayload) -> Result<AnalysisResult, CollaboratorError> {
    if let Some(message) = payload.error {
        return Err(CollaboratorError::Backend(message));
    }
    let summary_text = payload
        .summary
        .ok_or(CollaboratorError::MissingField("summary"))?;
    let classification_label = payload
        .classification
        .ok_or(CollaboratorError::MissingField("classification"))?;
    if classification_label == ERROR_CLASSIFICATION {
        return Err(CollaboratorError::Backend(summary_text));
    }
    Ok(AnalysisResult {
        summary_text,
        classification_label,
        audio_reference: payload.audio.unwrap_or_default(),
        source_info: payload.source_info,
        citations: payload.citations,
    })
}

/// Map a synthesis payload, attaching provenance built from the request.
///
/// # Errors
///
/// Fails when `synthesis` is absent, or `error` is set.
pub fn adapt_synthesis(
    request: &SynthesisRequest,
    payload: SynthesisPayload,
    today: NaiveDate,
) -> Result<AnalysisResult, CollaboratorError> {
    if let Some(message) = payload.error {
        return Err(CollaboratorError::Backend(message));
    }
    let summary_text = payload
        .synthesis
        .ok_or(CollaboratorError::MissingField("synthesis"))?;
    let total_papers = payload
        .total_papers
        .or_else(|| u32::try_from(request.paper_ids.len()).ok());

    let source_info = SourceInfo {
        title: format!("Cross-paper Synthesis: {}", request.query),
        authors: vec![SYNTHESIS_AUTHOR.to_string()],
        year: today.year().to_string(),
        journal: SYNTHESIS_JOURNAL.to_string(),
        access_date: today.format("%Y-%m-%d").to_string(),
        synthesis_type: Some(request.synthesis_type),
        total_papers,
        ..SourceInfo::default()
    };

    Ok(AnalysisResult {
        summary_text,
        classification_label: format!("Cross-paper synthesis ({})", request.synthesis_type),
        audio_reference: payload.audio.unwrap_or_default(),
        source_info: Some(source_info),
        citations: Some(Citations::Synthesis {
            papers: payload.paper_analyses,
            common_themes: payload.common_themes,
        }),
    })
}
