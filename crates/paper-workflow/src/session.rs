//! Search-and-select state for the cross-paper synthesis workflow.

use paper_client::Collaborator;
use paper_core::entities::Paper;
use paper_core::enums::{MaxResults, SourceFilter, SynthesisType};
use paper_core::errors::ValidationError;
use paper_core::requests::{SearchQuery, SynthesisRequest};

use crate::error::SessionError;

/// Ephemeral session: the current search results and the papers picked from
/// them, in the order they were picked.
///
/// Invariant: every selected id belongs to a paper in [`papers`](Self::papers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSession {
    query: String,
    source: SourceFilter,
    max_results: MaxResults,
    papers: Vec<Paper>,
    selected: Vec<String>,
    synthesis_type: SynthesisType,
}

impl SelectionSession {
    /// A fresh session with the given search and synthesis defaults.
    #[must_use]
    pub fn new(source: SourceFilter, max_results: MaxResults, synthesis_type: SynthesisType) -> Self {
        Self {
            source,
            max_results,
            synthesis_type,
            ..Self::default()
        }
    }

    /// Query text of the last successful search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn source(&self) -> SourceFilter {
        self.source
    }

    #[must_use]
    pub const fn max_results(&self) -> MaxResults {
        self.max_results
    }

    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    #[must_use]
    pub const fn synthesis_type(&self) -> SynthesisType {
        self.synthesis_type
    }

    pub const fn set_synthesis_type(&mut self, synthesis_type: SynthesisType) {
        self.synthesis_type = synthesis_type;
    }

    /// Run a search and, on success, replace the results and clear the
    /// selection.
    ///
    /// A blank query is rejected without contacting the collaborator. On
    /// failure the previous results and selection are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] for a blank query and
    /// [`SessionError::Collaborator`] when the search itself fails.
    pub async fn search(
        &mut self,
        collaborator: &dyn Collaborator,
        query: SearchQuery,
    ) -> Result<&[Paper], SessionError> {
        query.validate()?;
        let papers = collaborator.search(&query).await?;
        tracing::info!(
            query = query.query.trim(),
            source = %query.source,
            found = papers.len(),
            "search completed"
        );
        self.query = query.query.trim().to_string();
        self.source = query.source;
        self.max_results = query.max_results;
        self.papers = papers;
        self.selected.clear();
        Ok(&self.papers)
    }

    /// Flip the selection of `id`. Returns whether it is now selected.
    ///
    /// A re-selected id goes to the end of the selection order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPaper`] when `id` is not in the
    /// current results.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ValidationError> {
        if !self.papers.iter().any(|paper| paper.id == id) {
            return Err(ValidationError::UnknownPaper(id.to_string()));
        }
        if let Some(position) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(position);
            return Ok(false);
        }
        self.selected.push(id.to_string());
        Ok(true)
    }

    /// Select every paper, in result order.
    pub fn select_all(&mut self) {
        self.selected.clear();
        for paper in &self.papers {
            if !self.selected.contains(&paper.id) {
                self.selected.push(paper.id.clone());
            }
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Build the synthesis request for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InsufficientSelection`] when fewer than two
    /// papers are selected.
    pub fn synthesis_request(
        &mut self,
        synthesis_type: SynthesisType,
    ) -> Result<SynthesisRequest, ValidationError> {
        self.synthesis_type = synthesis_type;
        let request = SynthesisRequest {
            paper_ids: self.selected.clone(),
            synthesis_type,
            query: self.query.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}
