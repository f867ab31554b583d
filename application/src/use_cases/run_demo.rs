//! Run Demo use case.
//!
//! Runs a fixed set of three questions twice: first through the classifier
//! alone, then through the full chain. Every request is awaited before the
//! next one starts, so results are always reported in question order.

use super::route_question::{RouteError, RouteQuestionUseCase, RoutedAnswer};
use crate::ports::progress::RoutingProgressNotifier;
use router_domain::{Label, Question};
use serde::Serialize;
use tracing::info;

/// The built-in demo question sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoQuestionSet {
    /// guitar / world war 2 / arithmetic
    #[default]
    Basic,
    /// art assessment / Mongol invasion / arithmetic
    Branch,
}

impl DemoQuestionSet {
    /// Art, history and general question, in that order
    pub fn questions(&self) -> [&'static str; 3] {
        match self {
            DemoQuestionSet::Basic => [
                "how do I play a guitar?",
                "how did world war 2 begin?",
                "what is 2 + 2?",
            ],
            DemoQuestionSet::Branch => [
                "how to assess a work of art?",
                "when did Mongols attack Persia?",
                "what is 2 + 2?",
            ],
        }
    }
}

/// Results of a demo run, in question order
#[derive(Debug, Clone, Default, Serialize)]
pub struct DemoReport {
    pub classifications: Vec<(Question, Label)>,
    pub answers: Vec<RoutedAnswer>,
}

pub struct RunDemoUseCase {
    router: RouteQuestionUseCase,
}

impl RunDemoUseCase {
    pub fn new(router: RouteQuestionUseCase) -> Self {
        Self { router }
    }

    pub async fn execute(
        &self,
        set: DemoQuestionSet,
        progress: &dyn RoutingProgressNotifier,
    ) -> Result<DemoReport, RouteError> {
        let mut report = DemoReport::default();

        info!("Demo: classifying {} questions", set.questions().len());
        for text in set.questions() {
            let question = Question::new(text);
            progress.on_classification_start(&question);
            let label = self.router.classifier().execute(&question).await?;
            progress.on_classified(&question, &label);
            report.classifications.push((question, label));
        }

        info!("Demo: routing {} questions", set.questions().len());
        for text in set.questions() {
            let answer = self
                .router
                .execute_with_progress(Question::new(text), progress)
                .await?;
            report.answers.push(answer);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::GatewayError;
    use crate::ports::progress::NoRoutingProgress;
    use crate::test_support::{PersonaGateway, ScriptedGateway};
    use router_domain::{Model, Route};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_basic_set_routes_each_question() {
        let use_case = RunDemoUseCase::new(RouteQuestionUseCase::new(
            Arc::new(PersonaGateway),
            Model::Llama2,
        ));

        let report = use_case
            .execute(DemoQuestionSet::Basic, &NoRoutingProgress)
            .await
            .unwrap();

        let labels: Vec<&str> = report
            .classifications
            .iter()
            .map(|(_, label)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["Art", "History", "Other"]);

        let routes: Vec<Route> = report.answers.iter().map(|a| a.route).collect();
        assert_eq!(routes, vec![Route::Art, Route::History, Route::General]);
    }

    #[tokio::test]
    async fn test_branch_set_routes_each_question() {
        let use_case = RunDemoUseCase::new(RouteQuestionUseCase::new(
            Arc::new(PersonaGateway),
            Model::Llama2,
        ));

        let report = use_case
            .execute(DemoQuestionSet::Branch, &NoRoutingProgress)
            .await
            .unwrap();

        for (answer, route) in report.answers.iter().zip(Route::ALL) {
            assert_eq!(answer.route, route);
            assert!(answer.answer.starts_with(route.opening()));
        }
    }

    #[tokio::test]
    async fn test_requests_are_sequential_in_question_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Art", "History", "Other", "Art", "a1", "History", "a2", "Other", "a3",
        ]));
        let use_case =
            RunDemoUseCase::new(RouteQuestionUseCase::new(gateway.clone(), Model::Llama2));

        let report = use_case
            .execute(DemoQuestionSet::Basic, &NoRoutingProgress)
            .await
            .unwrap();

        assert_eq!(gateway.request_count(), 9);
        let answers: Vec<&str> = report.answers.iter().map(|a| a.answer.as_str()).collect();
        assert_eq!(answers, vec!["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn test_first_failure_stops_the_run() {
        let gateway = Arc::new(ScriptedGateway::with_results(vec![
            Ok("Art".to_string()),
            Err(GatewayError::ConnectionError("refused".to_string())),
        ]));
        let use_case =
            RunDemoUseCase::new(RouteQuestionUseCase::new(gateway.clone(), Model::Llama2));

        let result = use_case
            .execute(DemoQuestionSet::Basic, &NoRoutingProgress)
            .await;

        assert!(result.is_err());
        assert_eq!(gateway.request_count(), 2);
    }
}
