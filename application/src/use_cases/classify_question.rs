//! Classify Question use case.
//!
//! Renders the classification template with the question, sends it to the
//! routing model and returns the reply through the identity parser.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use router_domain::prompt::templates::{self, QUESTION_VAR};
use router_domain::{
    DomainError, Label, Model, OutputParser, PromptTemplate, Question, StringOutputParser,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during classification.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Template error: {0}")]
    TemplateError(#[from] DomainError),
}

/// Use case for classifying a question as History, Art or Other.
///
/// One completion request per call. Identical questions are not cached.
#[derive(Clone)]
pub struct ClassifyQuestionUseCase {
    gateway: Arc<dyn CompletionGateway>,
    model: Model,
    template: PromptTemplate,
}

impl ClassifyQuestionUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            template: templates::classification(),
        }
    }

    pub async fn execute(&self, question: &Question) -> Result<Label, ClassifyError> {
        let prompt = self
            .template
            .render_prompt(&[(QUESTION_VAR, question.content())])?;

        debug!("Classifying with model {}", self.model);
        let completion = self.gateway.complete(&self.model, &prompt).await?;

        let label = Label::new(StringOutputParser.parse(completion.text()));
        info!("Classified {:?} as {:?}", question.content(), label.as_str());
        Ok(label)
    }
}
