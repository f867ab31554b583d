//! Ollama server configuration from TOML (`[ollama]` section)

use crate::ollama::gateway::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Raw Ollama configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server (default: "http://localhost:11434").
    pub base_url: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
