//! Role-based model configuration from TOML (`[models]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use router_application::ModelConfig;
use router_domain::Model;
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// routing = "llama2"     # Classifier + persona answers
/// listing = "orca-mini"  # Comma separated list generator
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for classification and persona answers
    pub routing: Option<String>,
    /// Model for list generation
    pub listing: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    message: format!("models.{}: model name cannot be empty", field),
                }],
            ),
            Some(s) => (Some(Model::from_name(s.trim())), Vec::new()),
        }
    }

    pub fn parse_routing(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("routing", self.routing.as_ref())
    }

    pub fn parse_listing(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("listing", self.listing.as_ref())
    }

    /// Resolve into the application's model selection, defaulting unset or
    /// invalid roles.
    pub fn to_model_config(&self) -> ModelConfig {
        let mut config = ModelConfig::default();
        if let (Some(model), _) = self.parse_routing() {
            config.routing = model;
        }
        if let (Some(model), _) = self.parse_listing() {
            config.listing = model;
        }
        config
    }
}
