//! Spinner shown while a completion request is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use router_application::RoutingProgressNotifier;
use router_domain::{Label, Question, Route};
use std::sync::Mutex;
use std::time::Duration;

/// Reports routing progress with a single terminal spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn spin(&self, message: String) {
        let mut guard = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_message(message);
    }

    fn finish(&self) {
        let mut guard = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingProgressNotifier for ProgressReporter {
    fn on_classification_start(&self, question: &Question) {
        self.spin(format!("{} {}", "Classifying".cyan().bold(), question));
    }

    fn on_classified(&self, _question: &Question, _label: &Label) {
        self.finish();
    }

    fn on_route_selected(&self, _question: &Question, route: Route) {
        self.spin(format!(
            "{} {} persona",
            "Asking".cyan().bold(),
            route.as_str().yellow()
        ));
    }

    fn on_answered(&self, _question: &Question, _route: Route, _answer: &str) {
        self.finish();
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
