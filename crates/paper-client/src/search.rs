//! Paper search via `POST /search-papers/`.

use paper_core::entities::Paper;
use paper_core::requests::SearchQuery;
use reqwest::multipart::Form;

use crate::http::{check_response, reject_error_field};
use crate::payload::SearchPayload;
use crate::{CollaboratorError, HttpCollaborator};

impl HttpCollaborator {
    /// Search arXiv and/or Semantic Scholar.
    ///
    /// Each returned [`Paper`] carries its resolved selection id.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the request fails, the backend returns
    /// a non-success status, or the payload reports an error.
    pub async fn search_papers(&self, query: &SearchQuery) -> Result<Vec<Paper>, CollaboratorError> {
        tracing::debug!(
            query = query.query.trim(),
            source = query.source.as_str(),
            max_results = query.max_results.count(),
            "searching papers"
        );
        let form = Form::new()
            .text("query", query.query.trim().to_string())
            .text("source", query.source.as_str())
            .text("max_results", query.max_results.count().to_string());
        let resp = self
            .http
            .post(self.endpoint("/search-papers/"))
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let payload: SearchPayload = resp.json().await?;
        reject_error_field(payload.error)?;
        Ok(payload.papers.into_iter().map(Paper::from).collect())
    }
}
