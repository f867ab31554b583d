//! Generate List use case.
//!
//! Asks the listing model for five objects in a category and splits the reply
//! with [`CommaSeparatedListParser`].

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use router_domain::prompt::templates::{self, TEXT_VAR};
use router_domain::{
    ChatPromptTemplate, CommaSeparatedListParser, DomainError, Model, OutputParser,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during list generation.
#[derive(Error, Debug)]
pub enum GenerateListError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Template error: {0}")]
    TemplateError(#[from] DomainError),
}

#[derive(Clone)]
pub struct GenerateListUseCase {
    gateway: Arc<dyn CompletionGateway>,
    model: Model,
    template: ChatPromptTemplate,
}

impl GenerateListUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            template: templates::comma_separated_list(),
        }
    }

    pub async fn execute(&self, category: &str) -> Result<Vec<String>, GenerateListError> {
        let prompt = self.template.render(&[(TEXT_VAR, category)])?;

        debug!("Generating list for {:?} with model {}", category, self.model);
        let completion = self.gateway.complete(&self.model, &prompt).await?;

        let items = CommaSeparatedListParser.parse(completion.text());
        info!("Generated {} items for {:?}", items.len(), category);
        Ok(items)
    }
}
