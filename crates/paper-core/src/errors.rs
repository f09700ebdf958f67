//! Cross-cutting error types for pax.
//!
//! Domain-specific errors (`CollaboratorError`, `HistoryError`) live in their
//! own crates. Errors from every crate converge as `anyhow::Error` in `paper-cli`.

use thiserror::Error;

use crate::enums::WorkflowState;

/// Errors that can be raised by any pax crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {operation} is not allowed from {from} (would move to {to})")]
    InvalidTransition {
        operation: &'static str,
        from: WorkflowState,
        to: WorkflowState,
    },
}

/// User input rejected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    #[error("Please enter a {field}")]
    EmptyInput { field: &'static str },

    /// The upload workflow was started without file contents.
    #[error("Please select a file")]
    MissingFile,

    /// The id does not belong to the current search results.
    #[error("Paper '{0}' is not part of the current search results")]
    UnknownPaper(String),

    /// Fewer papers selected than synthesis requires.
    #[error("Please select at least {required} papers for synthesis (selected {selected})")]
    InsufficientSelection { selected: usize, required: usize },
}
