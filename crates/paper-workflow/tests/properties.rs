//! End-to-end behavior of the controller against a scripted collaborator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paper_client::{
    AnalysisPayload, Collaborator, CollaboratorError, CollaboratorPayload, SynthesisPayload,
};
use paper_core::entities::{Paper, SourceInfo};
use paper_core::enums::{MaxResults, SourceFilter, SynthesisType, WorkflowKind, WorkflowState};
use paper_core::errors::ValidationError;
use paper_core::requests::{SearchQuery, WorkflowRequest};
use paper_history::{HISTORY_CAPACITY, HistoryStore, MemorySlot};
use paper_workflow::{SelectionSession, SessionError, WorkflowController, WorkflowError};
use pretty_assertions::assert_eq;

/// Records every call and answers from a fixed script.
#[derive(Default)]
struct ScriptedCollaborator {
    analyze_calls: AtomicUsize,
    search_calls: AtomicUsize,
    requests: Mutex<Vec<WorkflowRequest>>,
    papers: Vec<Paper>,
    analysis: Option<AnalysisPayload>,
    synthesis: Option<SynthesisPayload>,
}

impl ScriptedCollaborator {
    fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> Option<WorkflowRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Collaborator for ScriptedCollaborator {
    async fn analyze(
        &self,
        request: &WorkflowRequest,
    ) -> Result<CollaboratorPayload, CollaboratorError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match request {
            WorkflowRequest::Synthesis(_) => self
                .synthesis
                .clone()
                .map(CollaboratorPayload::Synthesis)
                .ok_or(CollaboratorError::Api {
                    status: 500,
                    message: "synthesis failed".into(),
                }),
            other => {
                let payload = self.analysis.clone().ok_or(CollaboratorError::Api {
                    status: 500,
                    message: "analysis failed".into(),
                })?;
                Ok(match other.kind() {
                    WorkflowKind::Upload => CollaboratorPayload::Upload(payload),
                    WorkflowKind::Url => CollaboratorPayload::Url(payload),
                    _ => CollaboratorPayload::Doi(payload),
                })
            }
        }
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<Paper>, CollaboratorError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.papers.clone())
    }
}

fn paper(id: &str) -> Paper {
    Paper {
        id: id.to_string(),
        title: format!("Title {id}"),
        authors: vec!["A. Author".into()],
        summary: "abstract".into(),
        year: Some("2024".into()),
        venue: None,
        url: None,
        pdf_url: None,
        source: "Semantic Scholar".into(),
    }
}

fn analysis(title: &str) -> AnalysisPayload {
    AnalysisPayload {
        summary: Some("summary".into()),
        classification: Some("Neuroscience".into()),
        audio: Some("audio/n.mp3".into()),
        source_info: Some(SourceInfo {
            title: title.into(),
            ..SourceInfo::default()
        }),
        citations: None,
        error: None,
    }
}

fn upload() -> WorkflowRequest {
    WorkflowRequest::Upload {
        filename: "paper.pdf".into(),
        contents: b"%PDF-1.7".to_vec(),
        topics: "memory, sleep".into(),
    }
}

fn controller(
    collaborator: &Arc<ScriptedCollaborator>,
    slot: &Arc<MemorySlot>,
) -> WorkflowController<Arc<MemorySlot>> {
    let collaborator: Arc<dyn Collaborator> = collaborator.clone();
    WorkflowController::new(collaborator, HistoryStore::open(Arc::clone(slot)))
}

fn query(text: &str) -> SearchQuery {
    SearchQuery {
        query: text.into(),
        source: SourceFilter::SemanticScholar,
        max_results: MaxResults::Fifteen,
    }
}

#[tokio::test]
async fn history_is_capped_at_fifty() {
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(analysis("Capped")),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    let mut ids = Vec::new();
    for _ in 0..51 {
        controller.run(upload()).await.unwrap();
        ids.push(controller.history().latest_id().unwrap().to_string());
        controller.reset().unwrap();
    }

    let stored: Vec<&str> = controller
        .history()
        .entries()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(stored.len(), HISTORY_CAPACITY);
    assert_eq!(stored[0], ids[50]);
    assert!(!stored.contains(&ids[0].as_str()));

    let reopened = HistoryStore::open(Arc::clone(&slot));
    assert_eq!(reopened.len(), HISTORY_CAPACITY);
}

#[tokio::test]
async fn exactly_one_call_per_run() {
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(analysis("One")),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    let result = controller.run(upload()).await.unwrap();
    assert_eq!(result.classification_label, "Neuroscience");
    assert_eq!(collaborator.analyze_calls(), 1);
    assert_eq!(controller.state(), WorkflowState::Result);

    let err = controller.run(upload()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Core(_)));
    assert_eq!(collaborator.analyze_calls(), 1);
}

#[tokio::test]
async fn missing_summary_is_an_unrecorded_error() {
    let mut payload = analysis("No summary");
    payload.summary = None;
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(payload),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    let result = controller.run(upload()).await.unwrap().clone();
    assert_eq!(result.classification_label, "Error");
    assert_eq!(result.audio_reference, "");
    assert_eq!(
        result.summary_text,
        WorkflowKind::Upload.error_summary()
    );
    assert!(controller.history().is_empty());
    assert!(slot.contents().is_none());
}

#[tokio::test]
async fn error_labelled_payload_is_an_unrecorded_error() {
    let mut payload = analysis("Unresolvable DOI");
    payload.classification = Some("Error".into());
    payload.audio = Some("audio/err.mp3".into());
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(payload),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    let request = WorkflowRequest::Doi {
        doi: "10.1000/missing".into(),
        topics: String::new(),
    };
    let result = controller.run(request).await.unwrap().clone();
    assert!(result.is_error());
    assert_eq!(result.audio_reference, "");
    assert_eq!(result.summary_text, WorkflowKind::Doi.error_summary());
    assert_eq!(controller.state(), WorkflowState::Result);
    assert!(controller.history().is_empty());
    assert!(slot.contents().is_none());
}

#[tokio::test]
async fn reset_keeps_history_count() {
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(analysis("Kept")),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    controller.run(upload()).await.unwrap();
    let before = controller.history().len();
    controller.reset().unwrap();
    assert_eq!(controller.history().len(), before);
    assert_eq!(controller.state(), WorkflowState::Idle);
}

#[tokio::test]
async fn corrupt_slot_starts_empty_and_recovers() {
    let collaborator = Arc::new(ScriptedCollaborator {
        analysis: Some(analysis("Fresh")),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::with_contents("definitely not json"));
    let mut controller = controller(&collaborator, &slot);
    assert!(controller.history().is_empty());

    controller.run(upload()).await.unwrap();
    let persisted: Vec<serde_json::Value> =
        serde_json::from_str(&slot.contents().unwrap()).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0]["title"], "Fresh");
}

#[tokio::test]
async fn blank_search_never_calls_out() {
    let collaborator = Arc::new(ScriptedCollaborator::default());
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    let err = controller.search(query("   ")).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::EmptyInput { .. })
    ));
    assert_eq!(collaborator.search_calls(), 0);
}

#[tokio::test]
async fn new_search_clears_selection() {
    let collaborator = Arc::new(ScriptedCollaborator {
        papers: vec![paper("A"), paper("B")],
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);
    controller.open_session(SelectionSession::default());

    controller.search(query("first")).await.unwrap();
    controller.session_mut().unwrap().select_all();
    assert_eq!(controller.session().unwrap().selected().len(), 2);

    controller.search(query("second")).await.unwrap();
    let session = controller.session().unwrap();
    assert!(session.selected().is_empty());
    assert_eq!(session.query(), "second");
    assert_eq!(session.source(), SourceFilter::SemanticScholar);
    assert_eq!(session.max_results(), MaxResults::Fifteen);
}

#[tokio::test]
async fn synthesis_gate_and_selection_order() {
    let collaborator = Arc::new(ScriptedCollaborator {
        papers: vec![paper("A"), paper("B"), paper("C")],
        synthesis: Some(SynthesisPayload {
            synthesis: Some("Both papers argue...".into()),
            common_themes: vec!["plasticity".into()],
            ..SynthesisPayload::default()
        }),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    controller.search(query("synaptic plasticity")).await.unwrap();
    controller.session_mut().unwrap().toggle("B").unwrap();

    let err = controller
        .synthesize(SynthesisType::Comparative)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation(ValidationError::InsufficientSelection { selected: 1, .. })
    ));
    assert_eq!(collaborator.analyze_calls(), 0);
    assert_eq!(controller.state(), WorkflowState::Idle);
    assert!(controller.session().is_some());

    controller.session_mut().unwrap().toggle("A").unwrap();
    let result = controller
        .synthesize(SynthesisType::Comparative)
        .await
        .unwrap()
        .clone();
    assert_eq!(collaborator.analyze_calls(), 1);

    let Some(WorkflowRequest::Synthesis(sent)) = collaborator.last_request() else {
        panic!("expected a synthesis request");
    };
    assert_eq!(sent.joined_ids(), "B,A");
    assert_eq!(sent.query, "synaptic plasticity");
    assert_eq!(sent.synthesis_type, SynthesisType::Comparative);

    assert_eq!(
        result.classification_label,
        "Cross-paper synthesis (comparative)"
    );
    assert!(controller.session().is_none());

    let entry = &controller.history().entries()[0];
    assert_eq!(entry.kind, WorkflowKind::Synthesis);
    assert_eq!(entry.source_label, "Cross-Paper Synthesis");
    assert_eq!(entry.title, "Cross-paper Synthesis: synaptic plasticity");
}

#[tokio::test]
async fn synthesis_without_text_is_a_hard_failure() {
    let collaborator = Arc::new(ScriptedCollaborator {
        papers: vec![paper("A"), paper("B")],
        synthesis: Some(SynthesisPayload::default()),
        ..ScriptedCollaborator::default()
    });
    let slot = Arc::new(MemorySlot::new());
    let mut controller = controller(&collaborator, &slot);

    controller.search(query("q")).await.unwrap();
    controller.session_mut().unwrap().select_all();
    let result = controller
        .synthesize(SynthesisType::Comprehensive)
        .await
        .unwrap()
        .clone();

    assert!(result.is_error());
    assert_eq!(
        result.summary_text,
        WorkflowKind::Synthesis.error_summary()
    );
    assert_eq!(collaborator.analyze_calls(), 1);
    assert!(controller.history().is_empty());
}
