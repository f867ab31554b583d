//! Progress notification port
//!
//! Defines the interface for reporting progress while a question travels
//! through the classify-then-route chain.

use router_domain::{Label, Question, Route};

/// Callback for progress updates during routing
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so adapters only override what they display.
pub trait RoutingProgressNotifier: Send + Sync {
    /// Called before the classification request is sent
    fn on_classification_start(&self, _question: &Question) {}

    /// Called when the classifier returned a label
    fn on_classified(&self, _question: &Question, _label: &Label) {}

    /// Called once the route for a label is chosen, before the answer request
    fn on_route_selected(&self, _question: &Question, _route: Route) {}

    /// Called when the selected route answered
    fn on_answered(&self, _question: &Question, _route: Route, _answer: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRoutingProgress;

impl RoutingProgressNotifier for NoRoutingProgress {}
