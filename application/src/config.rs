//! Application-level configuration.
//!
//! Which model each use case talks to. The server address belongs to the
//! infrastructure adapter and is not known here.

use router_domain::Model;
use serde::{Deserialize, Serialize};

/// Role-based model selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model used by the classifier and the persona routes.
    pub routing: Model,
    /// Model used by the list generator.
    pub listing: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            routing: Model::default_routing(),
            listing: Model::default_listing(),
        }
    }
}

impl ModelConfig {
    pub fn with_routing(mut self, model: Model) -> Self {
        self.routing = model;
        self
    }

    pub fn with_listing(mut self, model: Model) -> Self {
        self.listing = model;
        self
    }
}
