//! Test doubles shared by the use case tests.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::progress::RoutingProgressNotifier;
use async_trait::async_trait;
use router_domain::{ChatPrompt, Completion, Label, Model, Question, Route};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays queued replies and records every request
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<(Model, ChatPrompt)>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<&str>) -> Self {
        Self::with_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn with_results(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(Model, ChatPrompt)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(
        &self,
        model: &Model,
        prompt: &ChatPrompt,
    ) -> Result<Completion, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.clone(), prompt.clone()));
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("No more replies".to_string()))?;
        reply.map(|text| Completion::new(model.as_str(), text))
    }
}

/// Gateway that answers like a well-behaved model would
///
/// Classification prompts get a label picked from keywords in the question;
/// persona prompts get the persona's opening phrase.
pub struct PersonaGateway;

#[async_trait]
impl CompletionGateway for PersonaGateway {
    async fn complete(
        &self,
        model: &Model,
        prompt: &ChatPrompt,
    ) -> Result<Completion, GatewayError> {
        let text = prompt.last_user_content().unwrap_or_default();
        let reply = if text.contains("Classification:") {
            if text.contains("guitar") || text.contains("work of art") {
                "Art"
            } else if text.contains("war") || text.contains("Mongols") {
                "History"
            } else {
                "Other"
            }
            .to_string()
        } else {
            let route = Route::ALL
                .into_iter()
                .find(|route| text.contains(route.opening()))
                .unwrap_or(Route::General);
            format!("{}, it is so.", route.opening())
        };
        Ok(Completion::new(model.as_str(), reply))
    }
}

/// Progress notifier that records events as strings
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl RoutingProgressNotifier for RecordingProgress {
    fn on_classification_start(&self, question: &Question) {
        self.push(format!("classify:{question}"));
    }

    fn on_classified(&self, _question: &Question, label: &Label) {
        self.push(format!("label:{label}"));
    }

    fn on_route_selected(&self, _question: &Question, route: Route) {
        self.push(format!("route:{route}"));
    }

    fn on_answered(&self, _question: &Question, route: Route, _answer: &str) {
        self.push(format!("answered:{route}"));
    }
}
