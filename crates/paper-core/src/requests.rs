//! Outbound requests issued to the collaborator.
//!
//! One variant per workflow kind. Requests are validated before the
//! controller leaves `Idle`, so an invalid request never reaches the network.

use crate::enums::{MaxResults, SourceFilter, SynthesisType, WorkflowKind};
use crate::errors::ValidationError;

/// Minimum number of selected papers for a synthesis request.
pub const MIN_SYNTHESIS_PAPERS: usize = 2;

/// A request for one of the four analysis workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowRequest {
    Upload {
        filename: String,
        contents: Vec<u8>,
        topics: String,
    },
    Url {
        url: String,
        topics: String,
    },
    Doi {
        doi: String,
        topics: String,
    },
    Synthesis(SynthesisRequest),
}

impl WorkflowRequest {
    #[must_use]
    pub const fn kind(&self) -> WorkflowKind {
        match self {
            Self::Upload { .. } => WorkflowKind::Upload,
            Self::Url { .. } => WorkflowKind::Url,
            Self::Doi { .. } => WorkflowKind::Doi,
            Self::Synthesis(_) => WorkflowKind::Synthesis,
        }
    }

    /// Reject empty required inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first missing input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Upload {
                filename, contents, ..
            } => {
                if contents.is_empty() || filename.trim().is_empty() {
                    return Err(ValidationError::MissingFile);
                }
            }
            Self::Url { url, .. } => require_text(url, "URL")?,
            Self::Doi { doi, .. } => require_text(doi, "DOI")?,
            Self::Synthesis(request) => request.validate()?,
        }
        Ok(())
    }
}

/// Cross-paper synthesis over previously selected papers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// Selected paper ids in selection order.
    pub paper_ids: Vec<String>,
    pub synthesis_type: SynthesisType,
    /// The query that produced the search results the ids came from.
    pub query: String,
}

impl SynthesisRequest {
    /// Ids joined with commas, preserving selection order.
    #[must_use]
    pub fn joined_ids(&self) -> String {
        self.paper_ids.join(",")
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::InsufficientSelection`] below the minimum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.paper_ids.len() < MIN_SYNTHESIS_PAPERS {
            return Err(ValidationError::InsufficientSelection {
                selected: self.paper_ids.len(),
                required: MIN_SYNTHESIS_PAPERS,
            });
        }
        Ok(())
    }
}

/// Parameters of a paper search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub source: SourceFilter,
    pub max_results: MaxResults,
}

impl SearchQuery {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInput`] for a blank query.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.query, "search query")
    }
}

fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyInput { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn synthesis(ids: &[&str]) -> SynthesisRequest {
        SynthesisRequest {
            paper_ids: ids.iter().map(ToString::to_string).collect(),
            synthesis_type: SynthesisType::Comparative,
            query: "graph neural networks".into(),
        }
    }

    #[test]
    fn joined_ids_keep_given_order() {
        assert_eq!(synthesis(&["B", "A", "C"]).joined_ids(), "B,A,C");
    }

    #[test]
    fn synthesis_requires_two_papers() {
        assert_eq!(
            synthesis(&["A"]).validate(),
            Err(ValidationError::InsufficientSelection {
                selected: 1,
                required: 2
            })
        );
        assert!(synthesis(&["A", "B"]).validate().is_ok());
    }

    #[test]
    fn blank_inputs_are_rejected() {
        let url = WorkflowRequest::Url {
            url: "   ".into(),
            topics: String::new(),
        };
        assert_eq!(
            url.validate(),
            Err(ValidationError::EmptyInput { field: "URL" })
        );

        let doi = WorkflowRequest::Doi {
            doi: String::new(),
            topics: "ml".into(),
        };
        assert_eq!(
            doi.validate(),
            Err(ValidationError::EmptyInput { field: "DOI" })
        );

        let upload = WorkflowRequest::Upload {
            filename: "paper.pdf".into(),
            contents: Vec::new(),
            topics: String::new(),
        };
        assert_eq!(upload.validate(), Err(ValidationError::MissingFile));
    }

    #[test]
    fn search_query_must_not_be_blank() {
        let query = SearchQuery {
            query: " \t".into(),
            source: SourceFilter::Both,
            max_results: MaxResults::Ten,
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn kind_matches_variant() {
        let request = WorkflowRequest::Synthesis(synthesis(&["A", "B"]));
        assert_eq!(request.kind(), WorkflowKind::Synthesis);
    }
}
