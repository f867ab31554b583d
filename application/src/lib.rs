//! Application layer for topic-router
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::ModelConfig;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    progress::{NoRoutingProgress, RoutingProgressNotifier},
};
pub use use_cases::answer_route::{AnswerRouteError, AnswerRouteUseCase};
pub use use_cases::classify_question::{ClassifyError, ClassifyQuestionUseCase};
pub use use_cases::generate_list::{GenerateListError, GenerateListUseCase};
pub use use_cases::route_question::{RouteError, RouteQuestionUseCase, RoutedAnswer};
pub use use_cases::run_demo::{DemoQuestionSet, DemoReport, RunDemoUseCase};
