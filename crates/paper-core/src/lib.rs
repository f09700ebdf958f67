//! # paper-core
//!
//! Core types, ID generation, and error types for pax.
//!
//! This crate provides the foundational types shared across all pax crates:
//! - The canonical analysis result, history entries, and search papers
//! - Workflow kinds and the controller state machine
//! - Outbound request shapes with input validation
//! - Time-derived history ids
//! - Cross-cutting error types
//! - Lenient serde adapters for collaborator payloads

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod requests;
