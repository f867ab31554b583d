//! Multi-turn chat prompt template

use super::template::PromptTemplate;
use crate::core::error::DomainError;
use crate::session::entities::{ChatMessage, ChatPrompt, Role};

/// A chat prompt template: one [`PromptTemplate`] per turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPromptTemplate {
    turns: Vec<(Role, PromptTemplate)>,
}

impl ChatPromptTemplate {
    pub fn from_messages(turns: Vec<(Role, PromptTemplate)>) -> Self {
        Self { turns }
    }

    /// System instruction followed by a human turn
    pub fn system_and_user(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self::from_messages(vec![
            (Role::System, PromptTemplate::new(system)),
            (Role::User, PromptTemplate::new(user)),
        ])
    }

    /// Render every turn with the same variables
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<ChatPrompt, DomainError> {
        let messages = self
            .turns
            .iter()
            .map(|(role, template)| {
                Ok(ChatMessage {
                    role: *role,
                    content: template.render(vars)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(ChatPrompt::new(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_system_and_user() {
        let template = ChatPromptTemplate::system_and_user("You list things.", "{text}");
        let prompt = template.render(&[("text", "colors")]).unwrap();

        assert_eq!(
            prompt.messages(),
            &[
                ChatMessage::system("You list things."),
                ChatMessage::user("colors"),
            ]
        );
    }

    #[test]
    fn test_render_propagates_missing_variable() {
        let template = ChatPromptTemplate::system_and_user("sys", "{text}");
        assert_eq!(
            template.render(&[]).unwrap_err(),
            DomainError::MissingVariable("text".to_string())
        );
    }
}
