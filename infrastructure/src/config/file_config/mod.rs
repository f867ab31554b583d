//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod models;
mod ollama;

pub use models::FileModelsConfig;
pub use ollama::FileOllamaConfig;

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model server settings
    pub ollama: FileOllamaConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_routing().1);
        issues.extend(self.models.parse_listing().1);

        let base_url = self.ollama.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyBaseUrl,
                message: "ollama.base_url cannot be empty".to_string(),
            });
        } else if Url::parse(base_url)
            .map(|url| !matches!(url.scheme(), "http" | "https"))
            .unwrap_or(true)
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBaseUrl {
                    value: base_url.to_string(),
                },
                message: format!(
                    "ollama.base_url: '{}' is not an http(s) URL",
                    base_url
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use router_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ollama]
base_url = "http://gpu-box:11434"

[models]
routing = "mistral"
listing = "orca-mini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
        let models = config.models.to_model_config();
        assert_eq!(models.routing, Model::Custom("mistral".to_string()));
        assert_eq!(models.listing, Model::OrcaMini);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
routing = "llama2"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert!(config.models.listing.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_base_url() {
        let mut config = FileConfig::default();
        config.ollama.base_url = "localhost:11434".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidBaseUrl { .. }
        ));

        config.ollama.base_url = " ".to_string();
        assert_eq!(config.validate()[0].code, ConfigIssueCode::EmptyBaseUrl);
    }

    #[test]
    fn test_validate_reports_empty_models() {
        let mut config = FileConfig::default();
        config.models.routing = Some(String::new());
        config.models.listing = Some(String::new());
        assert_eq!(config.validate().len(), 2);
    }
}
