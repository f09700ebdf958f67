//! Single-paper analysis and cross-paper synthesis endpoints.
//!
//! All analysis endpoints take `multipart/form-data`. The URL workflow passes
//! the paper URL as a query parameter and only the topics in the form.

use paper_core::requests::SynthesisRequest;
use reqwest::multipart::{Form, Part};

use crate::http::{check_response, reject_error_field};
use crate::payload::{AnalysisPayload, SynthesisPayload};
use crate::{CollaboratorError, HttpCollaborator};

impl HttpCollaborator {
    /// Upload a document for analysis via `POST /upload/`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the request fails, the backend returns
    /// a non-success status, or the payload reports an error.
    pub async fn analyze_upload(
        &self,
        filename: &str,
        contents: &[u8],
        topics: &str,
    ) -> Result<AnalysisPayload, CollaboratorError> {
        tracing::debug!(filename, bytes = contents.len(), "uploading document");
        let part = Part::bytes(contents.to_vec()).file_name(filename.to_string());
        let form = Form::new()
            .part("file", part)
            .text("topics", topics.to_string());
        self.post_analysis(&self.endpoint("/upload/"), form).await
    }

    /// Analyze the paper at `url` via `POST /process-url/?url=...`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the request fails, the backend returns
    /// a non-success status, or the payload reports an error.
    pub async fn analyze_url(
        &self,
        url: &str,
        topics: &str,
    ) -> Result<AnalysisPayload, CollaboratorError> {
        tracing::debug!(url, "analyzing url");
        let endpoint = format!(
            "{}?url={}",
            self.endpoint("/process-url/"),
            urlencoding::encode(url.trim())
        );
        let form = Form::new().text("topics", topics.to_string());
        self.post_analysis(&endpoint, form).await
    }

    /// Resolve and analyze a DOI via `POST /process-doi/`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the request fails, the backend returns
    /// a non-success status, or the payload reports an error.
    pub async fn analyze_doi(
        &self,
        doi: &str,
        topics: &str,
    ) -> Result<AnalysisPayload, CollaboratorError> {
        let doi = doi.trim();
        tracing::debug!(doi, "analyzing doi");
        let form = Form::new()
            .text("doi", doi.to_string())
            .text("topics", topics.to_string());
        self.post_analysis(&self.endpoint("/process-doi/"), form).await
    }

    /// Synthesize the selected papers via `POST /synthesize-papers/`.
    ///
    /// Ids are sent comma-joined in selection order.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the request fails, the backend returns
    /// a non-success status, or the payload reports an error.
    pub async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisPayload, CollaboratorError> {
        tracing::debug!(
            papers = request.paper_ids.len(),
            synthesis_type = request.synthesis_type.as_str(),
            "synthesizing papers"
        );
        let form = Form::new()
            .text("paper_ids", request.joined_ids())
            .text("synthesis_type", request.synthesis_type.as_str())
            .text("query", request.query.clone());
        let resp = self
            .http
            .post(self.endpoint("/synthesize-papers/"))
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let payload: SynthesisPayload = resp.json().await?;
        reject_error_field(payload.error.clone())?;
        Ok(payload)
    }

    async fn post_analysis(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<AnalysisPayload, CollaboratorError> {
        let resp = self.http.post(endpoint).multipart(form).send().await?;
        let resp = check_response(resp).await?;
        let payload: AnalysisPayload = resp.json().await?;
        reject_error_field(payload.error.clone())?;
        Ok(payload)
    }
}
