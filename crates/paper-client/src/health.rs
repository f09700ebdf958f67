//! Backend liveness probe.

use crate::http::check_response;
use crate::payload::HealthStatus;
use crate::{CollaboratorError, HttpCollaborator};

impl HttpCollaborator {
    /// Query `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the backend is unreachable or answers
    /// with a non-success status.
    pub async fn health(&self) -> Result<HealthStatus, CollaboratorError> {
        let resp = self.http.get(self.endpoint("/health")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}
