use paper_client::CollaboratorError;
use paper_core::errors::{CoreError, ValidationError};
use thiserror::Error;

/// Errors returned by the workflow controller.
///
/// Collaborator failures are not errors at this level: they become the fixed
/// error result and the controller still reaches `result`.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Errors surfaced inline by a paper search.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Search failed: {0}")]
    Collaborator(#[from] CollaboratorError),
}
