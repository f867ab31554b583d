//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — model identifiers understood by the completion server
//! - [`question::Question`] — the user's question, captured verbatim
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
