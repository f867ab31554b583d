//! Model value object representing a model served by the completion server

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models known to the router (Value Object)
///
/// Any name the server understands can be used through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Default model for classification and persona answers
    Llama2,
    /// Default model for list generation
    OrcaMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama2 => "llama2",
            Model::OrcaMini => "orca-mini",
            Model::Custom(s) => s,
        }
    }

    /// Resolve a model name, falling back to [`Model::Custom`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "llama2" => Model::Llama2,
            "orca-mini" => Model::OrcaMini,
            other => Model::Custom(other.to_string()),
        }
    }

    /// Default model used to classify and answer questions
    pub fn default_routing() -> Self {
        Model::Llama2
    }

    /// Default model used to generate comma separated lists
    pub fn default_listing() -> Self {
        Model::OrcaMini
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::default_routing()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_names() {
        assert_eq!(Model::from_name("llama2"), Model::Llama2);
        assert_eq!(Model::from_name("orca-mini"), Model::OrcaMini);
        assert_eq!(Model::OrcaMini.to_string(), "orca-mini");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistral:7b".parse().unwrap();
        assert_eq!(model, Model::Custom("mistral:7b".to_string()));
        assert_eq!(model.to_string(), "mistral:7b");
    }

    #[test]
    fn test_model_defaults() {
        assert_eq!(Model::default(), Model::Llama2);
        assert_eq!(Model::default_listing(), Model::OrcaMini);
    }

    #[test]
    fn test_model_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Llama2).unwrap();
        assert_eq!(json, "\"llama2\"");
        let parsed: Model = serde_json::from_str("\"phi3\"").unwrap();
        assert_eq!(parsed, Model::Custom("phi3".to_string()));
    }
}
