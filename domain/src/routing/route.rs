//! Persona routes and the label decision table

use super::label::Label;
use crate::prompt::PromptTemplate;
use crate::prompt::templates::{ART_PERSONA, GENERAL_PERSONA, HISTORY_PERSONA};
use serde::{Deserialize, Serialize};

/// One of the three fixed persona routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    History,
    Art,
    General,
}

impl Route {
    /// All routes, in the order the decision table checks them
    pub const ALL: [Route; 3] = [Route::Art, Route::History, Route::General];

    /// Select the route for a label.
    ///
    /// First match wins, case-insensitive substring test:
    /// 1. contains "art" → [`Route::Art`]
    /// 2. contains "history" → [`Route::History`]
    /// 3. anything else → [`Route::General`]
    ///
    /// Total over every possible label; an ambiguous or empty label is not an
    /// error and lands on the general route.
    pub fn select(label: &Label) -> Route {
        if label.mentions("art") {
            Route::Art
        } else if label.mentions("history") {
            Route::History
        } else {
            Route::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::History => "history",
            Route::Art => "art",
            Route::General => "general",
        }
    }

    /// The persona template text for this route
    pub fn persona(&self) -> &'static str {
        match self {
            Route::History => HISTORY_PERSONA,
            Route::Art => ART_PERSONA,
            Route::General => GENERAL_PERSONA,
        }
    }

    pub fn template(&self) -> PromptTemplate {
        PromptTemplate::new(self.persona())
    }

    /// The phrase every answer on this route is instructed to start with
    pub fn opening(&self) -> &'static str {
        match self {
            Route::History => "As Herodotus told me",
            Route::Art => "As Leonardo Da Vinci told me",
            Route::General => "As God told me",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
