//! Error types for the Ollama adapter

use router_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OllamaError::Transport(e) => GatewayError::RequestFailed(e.to_string()),
            OllamaError::Status {
                status: 404,
                message,
            } => GatewayError::ModelNotAvailable(message),
            e @ OllamaError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            e @ OllamaError::ParseError { .. } => GatewayError::MalformedResponse(e.to_string()),
            e @ OllamaError::InvalidBaseUrl { .. } => GatewayError::Other(e.to_string()),
        }
    }
}
