//! Ollama implementation of the completion gateway

use super::error::{OllamaError, Result};
use super::protocol::{ChatRequest, ChatResponse, ErrorResponse};
use async_trait::async_trait;
use reqwest::Url;
use router_application::{CompletionGateway, GatewayError};
use router_domain::{ChatPrompt, Completion, Model};
use tracing::{debug, trace};

/// Default address of a locally running Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Gateway that sends chat prompts to an Ollama server.
///
/// No timeout is configured on the HTTP client: a hung server blocks the
/// caller until the connection is closed.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: reqwest::Client,
    chat_url: Url,
}

impl OllamaGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let chat_url = chat_endpoint(base_url)?;
        Ok(Self { client, chat_url })
    }

    /// Send one non-streaming chat request
    pub async fn chat(&self, model: &Model, prompt: &ChatPrompt) -> Result<Completion> {
        let request = ChatRequest::new(model, prompt);
        debug!(
            "POST {} model={} messages={}",
            self.chat_url,
            model,
            request.messages.len()
        );

        let response = self
            .client
            .post(self.chat_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!("Ollama replied {}: {}", status, body);

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(OllamaError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OllamaError::ParseError {
                error: e.to_string(),
                raw: body.clone(),
            })?;

        let model_name = if parsed.model.is_empty() {
            model.to_string()
        } else {
            parsed.model
        };
        Ok(Completion::new(model_name, parsed.message.content))
    }
}

#[async_trait]
impl CompletionGateway for OllamaGateway {
    async fn complete(
        &self,
        model: &Model,
        prompt: &ChatPrompt,
    ) -> std::result::Result<Completion, GatewayError> {
        self.chat(model, prompt).await.map_err(GatewayError::from)
    }
}

fn chat_endpoint(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| OllamaError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    let joined = format!("{}/api/chat", base.as_str().trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| invalid(e.to_string()))
}
