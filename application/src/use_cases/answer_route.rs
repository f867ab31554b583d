//! Answer Route use case.
//!
//! Executes one persona route: renders the route's template with the original
//! question and returns the model's reply unmodified.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use router_domain::prompt::templates::QUESTION_VAR;
use router_domain::{DomainError, Model, Question, Route};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while answering on a route.
#[derive(Error, Debug)]
pub enum AnswerRouteError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Template error: {0}")]
    TemplateError(#[from] DomainError),
}

/// Executor for a chosen [`Route`].
#[derive(Clone)]
pub struct AnswerRouteUseCase {
    gateway: Arc<dyn CompletionGateway>,
    model: Model,
}

impl AnswerRouteUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: Model) -> Self {
        Self { gateway, model }
    }

    pub async fn execute(
        &self,
        route: Route,
        question: &Question,
    ) -> Result<String, AnswerRouteError> {
        let prompt = route
            .template()
            .render_prompt(&[(QUESTION_VAR, question.content())])?;

        debug!("Answering on {} route with model {}", route, self.model);
        let completion = self.gateway.complete(&self.model, &prompt).await?;
        Ok(completion.into_text())
    }
}
