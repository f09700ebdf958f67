//! The workflow state machine.
//!
//! ```text
//! idle ──begin──▶ analyzing ──complete──▶ result ──reset──▶ idle
//!   └──────────── load_from_history ────────▶ result ◀──┘
//! ```
//!
//! A submission is split into [`WorkflowController::begin`] and
//! [`WorkflowController::complete`]. `begin` hands out the only
//! [`PendingWorkflow`] token, and `complete` consumes it, so the controller can
//! leave `analyzing` only by resolving the one outstanding request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use paper_client::{Collaborator, CollaboratorError, CollaboratorPayload};
use paper_core::entities::{AnalysisResult, HistoryEntry, Paper};
use paper_core::enums::{SynthesisType, WorkflowKind, WorkflowState};
use paper_core::errors::{CoreError, ValidationError};
use paper_core::requests::{SearchQuery, WorkflowRequest};
use paper_history::{HistorySlot, HistoryStore};

use crate::adapter;
use crate::error::{SessionError, WorkflowError};
use crate::session::SelectionSession;

/// A submitted request awaiting its collaborator outcome.
#[derive(Debug)]
#[must_use = "a pending workflow must be completed"]
pub struct PendingWorkflow {
    request: WorkflowRequest,
}

impl PendingWorkflow {
    #[must_use]
    pub const fn request(&self) -> &WorkflowRequest {
        &self.request
    }

    #[must_use]
    pub const fn kind(&self) -> WorkflowKind {
        self.request.kind()
    }
}

/// Coordinates the four analysis workflows.
pub struct WorkflowController<S: HistorySlot> {
    collaborator: Arc<dyn Collaborator>,
    history: HistoryStore<S>,
    state: WorkflowState,
    current: Option<AnalysisResult>,
    session: Option<SelectionSession>,
}

impl<S: HistorySlot> WorkflowController<S> {
    pub fn new(collaborator: Arc<dyn Collaborator>, history: HistoryStore<S>) -> Self {
        Self {
            collaborator,
            history,
            state: WorkflowState::Idle,
            current: None,
            session: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> WorkflowState {
        self.state
    }

    /// The result being displayed, if the controller is in `result`.
    #[must_use]
    pub const fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub const fn history_mut(&mut self) -> &mut HistoryStore<S> {
        &mut self.history
    }

    // ── Submission ─────────────────────────────────────────────────

    /// Validate `request` and move `idle → analyzing`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] for invalid input and
    /// [`WorkflowError::Core`] when not idle. The state is unchanged on error.
    pub fn begin(&mut self, request: WorkflowRequest) -> Result<PendingWorkflow, WorkflowError> {
        self.ensure("start", &[WorkflowState::Idle], WorkflowState::Analyzing)?;
        request.validate()?;
        self.transition(WorkflowState::Analyzing, request.kind());
        Ok(PendingWorkflow { request })
    }

    /// Resolve `pending` with the collaborator's outcome and move to `result`.
    ///
    /// A successful outcome is normalized and recorded in history. Any failure,
    /// including a payload the adapter rejects, becomes the fixed error result
    /// and is not recorded.
    pub fn complete(
        &mut self,
        pending: PendingWorkflow,
        outcome: Result<CollaboratorPayload, CollaboratorError>,
    ) -> &AnalysisResult {
        self.complete_at(pending, outcome, Utc::now())
    }

    fn complete_at(
        &mut self,
        pending: PendingWorkflow,
        outcome: Result<CollaboratorPayload, CollaboratorError>,
        now: DateTime<Utc>,
    ) -> &AnalysisResult {
        let kind = pending.kind();
        let adapted = outcome
            .and_then(|payload| adapter::adapt(&pending.request, payload, now.date_naive()));

        let result = match adapted {
            Ok(result) => {
                let entry =
                    HistoryEntry::new(kind, result.clone(), now, self.history.latest_id());
                if let Err(error) = self.history.append(entry) {
                    tracing::warn!(%error, "failed to persist history; keeping entry in memory");
                }
                result
            }
            Err(error) => {
                tracing::warn!(%kind, %error, "workflow failed");
                AnalysisResult::error(kind)
            }
        };

        if kind == WorkflowKind::Synthesis {
            self.session = None;
        }
        self.transition(WorkflowState::Result, kind);
        self.current.insert(result)
    }

    /// Submit `request` and wait for the collaborator. Exactly one outbound
    /// call is made.
    ///
    /// # Errors
    ///
    /// Only validation and state errors; collaborator failures produce the
    /// error result.
    pub async fn run(&mut self, request: WorkflowRequest) -> Result<&AnalysisResult, WorkflowError> {
        let pending = self.begin(request)?;
        let outcome = self.collaborator.analyze(pending.request()).await;
        Ok(self.complete(pending, outcome))
    }

    // ── Result ─────────────────────────────────────────────────────

    /// Discard the current result and return to `idle`. History is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Core`] unless the controller is in `result`.
    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.ensure("reset", &[WorkflowState::Result], WorkflowState::Idle)?;
        self.current = None;
        self.state = WorkflowState::Idle;
        tracing::info!(state = %self.state, "workflow reset");
        Ok(())
    }

    /// Display a stored entry without contacting the collaborator.
    ///
    /// The history list is neither re-ranked nor appended to.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Core`] while analyzing or when no entry has
    /// `id`.
    pub fn load_from_history(&mut self, id: &str) -> Result<&AnalysisResult, WorkflowError> {
        self.ensure(
            "load from history",
            &[WorkflowState::Idle, WorkflowState::Result],
            WorkflowState::Result,
        )?;
        let entry = self.history.get(id).ok_or_else(|| CoreError::NotFound {
            entity_type: "history entry".to_string(),
            id: id.to_string(),
        })?;
        let (kind, result) = (entry.kind, entry.result.clone());
        self.session = None;
        self.transition(WorkflowState::Result, kind);
        Ok(self.current.insert(result))
    }

    // ── Synthesis session ──────────────────────────────────────────

    /// Enter the synthesis workflow, replacing any previous session.
    pub fn open_session(&mut self, session: SelectionSession) -> &mut SelectionSession {
        self.session.insert(session)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&SelectionSession> {
        self.session.as_ref()
    }

    pub const fn session_mut(&mut self) -> Option<&mut SelectionSession> {
        self.session.as_mut()
    }

    /// Leave the synthesis workflow, discarding its session.
    pub fn close_session(&mut self) {
        self.session = None;
    }

    /// Search within the synthesis session, opening a default one if needed.
    ///
    /// # Errors
    ///
    /// See [`SelectionSession::search`].
    pub async fn search(&mut self, query: SearchQuery) -> Result<&[Paper], SessionError> {
        let session = self.session.get_or_insert_with(SelectionSession::default);
        session.search(self.collaborator.as_ref(), query).await
    }

    /// Synthesize the session's selected papers.
    ///
    /// The session is discarded once a result (success or error) is produced.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] when fewer than two papers are
    /// selected (no call is made and the session is kept), and
    /// [`WorkflowError::Core`] when not idle.
    pub async fn synthesize(
        &mut self,
        synthesis_type: SynthesisType,
    ) -> Result<&AnalysisResult, WorkflowError> {
        let request = match self.session.as_mut() {
            Some(session) => session.synthesis_request(synthesis_type)?,
            None => {
                return Err(ValidationError::InsufficientSelection {
                    selected: 0,
                    required: paper_core::requests::MIN_SYNTHESIS_PAPERS,
                }
                .into());
            }
        };
        self.run(WorkflowRequest::Synthesis(request)).await
    }

    // ── Internals ──────────────────────────────────────────────────

    fn ensure(
        &self,
        operation: &'static str,
        allowed_from: &[WorkflowState],
        to: WorkflowState,
    ) -> Result<(), CoreError> {
        if allowed_from.contains(&self.state) && self.state.can_transition_to(to) {
            return Ok(());
        }
        Err(CoreError::InvalidTransition {
            operation,
            from: self.state,
            to,
        })
    }

    fn transition(&mut self, to: WorkflowState, kind: WorkflowKind) {
        tracing::info!(from = %self.state, to = %to, %kind, "workflow transition");
        self.state = to;
    }
}
