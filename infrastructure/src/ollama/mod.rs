//! Ollama adapter
//!
//! Implements [`CompletionGateway`](router_application::CompletionGateway)
//! against the Ollama chat endpoint (`POST {base_url}/api/chat`) with
//! streaming disabled: one JSON request, one JSON reply.

pub mod error;
pub mod gateway;
pub mod protocol;
