//! Domain layer for topic-router
//!
//! This crate contains the core entities, value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classify, then route
//!
//! A [`Question`] is first classified into a free-form [`Label`] by the model.
//! [`Route::select`] then maps that label onto one of three persona routes:
//!
//! - **Art**: the label mentions "art" (checked first)
//! - **History**: the label mentions "history"
//! - **General**: anything else, including "Other" and empty labels
//!
//! ## Listing
//!
//! The list prompt asks the model for five objects in a category and the
//! [`CommaSeparatedListParser`] splits the reply.

pub mod core;
pub mod parsing;
pub mod prompt;
pub mod routing;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, question::Question};
pub use parsing::{CommaSeparatedListParser, OutputParser, StringOutputParser};
pub use prompt::{ChatPromptTemplate, PromptTemplate, templates};
pub use routing::{label::Label, route::Route};
pub use session::{
    entities::{ChatMessage, ChatPrompt, Role},
    response::Completion,
};
