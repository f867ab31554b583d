//! Infrastructure layer for topic-router
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileModelsConfig, FileOllamaConfig,
    Severity,
};
pub use ollama::{
    error::{OllamaError, Result},
    gateway::OllamaGateway,
};
