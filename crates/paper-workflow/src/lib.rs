//! # paper-workflow
//!
//! Client-side control layer for paper analysis:
//!
//! - [`adapter`] maps collaborator payloads onto the canonical
//!   [`AnalysisResult`](paper_core::entities::AnalysisResult).
//! - [`session`] holds the search-and-select state of the synthesis workflow.
//! - [`controller`] is the `idle → analyzing → result` state machine that
//!   drives both and records successes in the history store.

pub mod adapter;
pub mod controller;
pub mod error;
pub mod session;

pub use controller::{PendingWorkflow, WorkflowController};
pub use error::{SessionError, WorkflowError};
pub use session::SelectionSession;
