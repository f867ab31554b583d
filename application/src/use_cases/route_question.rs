//! Route Question use case.
//!
//! The full chain:
//! 1. Classify the question into a raw [`Label`]
//! 2. Select a [`Route`] with [`Route::select`] (pure, never fails)
//! 3. Answer the original question on that route
//!
//! Exactly one route is executed per question. A misclassified question is
//! answered by the wrong persona rather than reported as an error.

use super::answer_route::{AnswerRouteError, AnswerRouteUseCase};
use super::classify_question::{ClassifyError, ClassifyQuestionUseCase};
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{NoRoutingProgress, RoutingProgressNotifier};
use router_domain::{Label, Model, Question, Route};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while routing a question.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Answer failed: {0}")]
    Answer(#[from] AnswerRouteError),
}

/// Output of the full chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedAnswer {
    pub question: Question,
    pub label: Label,
    pub route: Route,
    pub answer: String,
}

/// Use case for answering a question through the classify-then-route chain.
#[derive(Clone)]
pub struct RouteQuestionUseCase {
    classifier: ClassifyQuestionUseCase,
    answerer: AnswerRouteUseCase,
}

impl RouteQuestionUseCase {
    /// Build the chain with the same gateway and model for both stages.
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: Model) -> Self {
        Self {
            classifier: ClassifyQuestionUseCase::new(gateway.clone(), model.clone()),
            answerer: AnswerRouteUseCase::new(gateway, model),
        }
    }

    pub fn classifier(&self) -> &ClassifyQuestionUseCase {
        &self.classifier
    }

    pub async fn execute(&self, question: Question) -> Result<RoutedAnswer, RouteError> {
        self.execute_with_progress(question, &NoRoutingProgress)
            .await
    }

    pub async fn execute_with_progress(
        &self,
        question: Question,
        progress: &dyn RoutingProgressNotifier,
    ) -> Result<RoutedAnswer, RouteError> {
        progress.on_classification_start(&question);
        let label = self.classifier.execute(&question).await?;
        progress.on_classified(&question, &label);

        let route = Route::select(&label);
        info!("Label {:?} selected the {} route", label.as_str(), route);
        progress.on_route_selected(&question, route);

        let answer = self.answerer.execute(route, &question).await?;
        progress.on_answered(&question, route, &answer);

        Ok(RoutedAnswer {
            question,
            label,
            route,
            answer,
        })
    }
}
