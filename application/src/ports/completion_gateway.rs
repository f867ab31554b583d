//! Completion gateway port
//!
//! Defines the interface for sending a rendered prompt to a model server.

use async_trait::async_trait;
use router_domain::{ChatPrompt, Completion, Model};
use thiserror::Error;

/// Errors that can occur during completion requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to a text-completion capability
///
/// One call is one outbound request. Implementations must not cache, retry
/// or time out on their own; failures are returned to the caller as-is.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send `prompt` to `model` and return the assistant's reply
    async fn complete(&self, model: &Model, prompt: &ChatPrompt)
    -> Result<Completion, GatewayError>;
}
