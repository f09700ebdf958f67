//! # paper-client
//!
//! HTTP client for the paper analysis backend.
//!
//! The workflow layer talks to the backend only through the [`Collaborator`]
//! trait so it can be driven by a fake in tests. [`HttpCollaborator`] is the
//! production implementation:
//! - `POST /upload/`, `/process-url/`, `/process-doi/` (single-paper analysis)
//! - `POST /synthesize-papers/` (cross-paper synthesis)
//! - `POST /search-papers/` (arXiv / Semantic Scholar search)
//! - `GET /health`

pub mod analyze;
pub mod health;
pub mod payload;
pub mod search;

mod error;
mod http;

pub use error::CollaboratorError;
pub use payload::{AnalysisPayload, CollaboratorPayload, HealthStatus, SynthesisPayload};

use std::time::Duration;

use async_trait::async_trait;
use paper_core::entities::Paper;
use paper_core::requests::{SearchQuery, WorkflowRequest};

// ── Trait ──────────────────────────────────────────────────────────

/// The remote service that performs analysis, synthesis, and search.
///
/// Each call is a single request/response exchange. Implementations never
/// retry; a failed call is reported once and the caller decides what to show.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Run the analysis or synthesis described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] on transport failure, a non-success
    /// status, or a payload carrying an `error` field.
    async fn analyze(
        &self,
        request: &WorkflowRequest,
    ) -> Result<CollaboratorPayload, CollaboratorError>;

    /// Search the paper indexes.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] on transport failure, a non-success
    /// status, or a payload carrying an `error` field.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Paper>, CollaboratorError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Default per-request timeout. Analysis includes narration, which is slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// HTTP implementation of [`Collaborator`].
pub struct HttpCollaborator {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCollaborator {
    /// Create a client for the backend at `base_url`.
    ///
    /// A trailing `/` on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, CollaboratorError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Collaborator for HttpCollaborator {
    async fn analyze(
        &self,
        request: &WorkflowRequest,
    ) -> Result<CollaboratorPayload, CollaboratorError> {
        match request {
            WorkflowRequest::Upload {
                filename,
                contents,
                topics,
            } => Ok(CollaboratorPayload::Upload(
                self.analyze_upload(filename, contents, topics).await?,
            )),
            WorkflowRequest::Url { url, topics } => Ok(CollaboratorPayload::Url(
                self.analyze_url(url, topics).await?,
            )),
            WorkflowRequest::Doi { doi, topics } => Ok(CollaboratorPayload::Doi(
                self.analyze_doi(doi, topics).await?,
            )),
            WorkflowRequest::Synthesis(synthesis) => Ok(CollaboratorPayload::Synthesis(
                self.synthesize(synthesis).await?,
            )),
        }
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Paper>, CollaboratorError> {
        self.search_papers(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper_core::enums::{MaxResults, SourceFilter};

    fn client() -> HttpCollaborator {
        HttpCollaborator::new("http://localhost:8000/", DEFAULT_TIMEOUT, "pax/0.1").unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/upload/"), "http://localhost:8000/upload/");
    }

    #[tokio::test]
    async fn unreachable_backend_is_http_error() {
        let client =
            HttpCollaborator::new("http://127.0.0.1:9", Duration::from_secs(2), "pax/0.1")
                .unwrap();
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Http(_)));
    }

    #[tokio::test]
    #[ignore] // requires a running backend
    async fn live_search() {
        let client = client();
        let papers = Collaborator::search(
            &client,
            &SearchQuery {
                query: "transformer architectures".into(),
                source: SourceFilter::Both,
                max_results: MaxResults::Five,
            },
        )
        .await
        .unwrap();
        for paper in &papers {
            println!("  [{}] {} ({})", paper.source, paper.title, paper.id);
        }
    }

    #[tokio::test]
    #[ignore] // requires a running backend
    async fn live_doi_analysis() {
        let client = client();
        let payload = client
            .analyze(&WorkflowRequest::Doi {
                doi: "10.48550/arXiv.1706.03762".into(),
                topics: String::new(),
            })
            .await
            .unwrap();
        println!("{payload:#?}");
    }
}
