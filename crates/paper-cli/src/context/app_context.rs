use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use paper_client::{Collaborator, HttpCollaborator};
use paper_config::PaxConfig;
use paper_history::{FileSlot, HistoryStore};
use paper_workflow::{SelectionSession, WorkflowController};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PaxConfig,
    pub client: Arc<HttpCollaborator>,
    pub controller: WorkflowController<FileSlot>,
}

impl AppContext {
    /// Build the backend client and load history from the configured path.
    pub fn init(config: PaxConfig) -> anyhow::Result<Self> {
        let client = HttpCollaborator::new(
            config.backend.base_url(),
            Duration::from_secs(config.backend.timeout_secs),
            &config.backend.user_agent,
        )
        .context("failed to build backend HTTP client")?;
        let client = Arc::new(client);

        let history_path = config.history.resolved_path();
        tracing::debug!(path = %history_path.display(), "opening history");
        let history = HistoryStore::open(FileSlot::new(history_path));

        let collaborator: Arc<dyn Collaborator> = client.clone();
        let controller = WorkflowController::new(collaborator, history);

        Ok(Self {
            config,
            client,
            controller,
        })
    }

    /// Topics from the command line, else the configured default.
    #[must_use]
    pub fn topics(&self, explicit: Option<&str>) -> String {
        explicit.map_or_else(
            || self.config.general.default_topics.clone(),
            ToString::to_string,
        )
    }

    /// A synthesis session seeded with the configured search defaults.
    #[must_use]
    pub fn new_session(&self) -> SelectionSession {
        let general = &self.config.general;
        SelectionSession::new(
            general.default_source,
            general.default_max_results,
            general.default_synthesis_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use paper_config::PaxConfig;
    use paper_core::enums::{MaxResults, SourceFilter};
    use pretty_assertions::assert_eq;

    use super::AppContext;

    fn config_in(dir: &tempfile::TempDir) -> PaxConfig {
        let mut config = PaxConfig::default();
        config.history.path = dir.path().join("history.json").display().to_string();
        config.general.default_topics = "methods".into();
        config.general.default_source = SourceFilter::Arxiv;
        config.general.default_max_results = MaxResults::Five;
        config
    }

    #[test]
    fn init_opens_empty_history_when_file_is_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = AppContext::init(config_in(&dir)).unwrap();
        assert!(ctx.controller.history().is_empty());
        assert_eq!(ctx.client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn topics_fall_back_to_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = AppContext::init(config_in(&dir)).unwrap();
        assert_eq!(ctx.topics(Some("ablation")), "ablation");
        assert_eq!(ctx.topics(None), "methods");
    }

    #[test]
    fn new_session_uses_configured_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = AppContext::init(config_in(&dir)).unwrap();
        let session = ctx.new_session();
        assert_eq!(session.source(), SourceFilter::Arxiv);
        assert_eq!(session.max_results(), MaxResults::Five);
        assert!(session.papers().is_empty());
    }
}
