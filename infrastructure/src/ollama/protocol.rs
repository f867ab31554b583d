//! Wire types for the Ollama chat endpoint

use router_domain::{ChatPrompt, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a Model, prompt: &'a ChatPrompt) -> Self {
        Self {
            model: model.as_str(),
            messages: prompt
                .messages()
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: String,
    pub message: ResponseMessage,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

/// Body Ollama sends with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
