//! Completion value object returned by the model

use serde::{Deserialize, Serialize};

/// The model's reply to a [`ChatPrompt`](super::entities::ChatPrompt)
///
/// Carries the assistant message text unmodified; parsing is left to an
/// [`OutputParser`](crate::parsing::OutputParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub model: String,
    pub content: String,
}

impl Completion {
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            content: content.into(),
        }
    }

    /// The assistant message text
    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn into_text(self) -> String {
        self.content
    }
}
