//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing template variable: {0}")]
    MissingVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_display() {
        let error = DomainError::MissingVariable("question".to_string());
        assert_eq!(error.to_string(), "Missing template variable: question");
    }
}
