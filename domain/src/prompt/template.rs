//! Single-string prompt template with `{name}` placeholders

use crate::core::error::DomainError;
use crate::session::entities::ChatPrompt;

/// A prompt template (Value Object)
///
/// Placeholders are written `{name}` where `name` is made of ASCII
/// alphanumerics and underscores. Braces around anything else are kept as
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
}

impl PromptTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the placeholders in order of appearance, duplicates included
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.source.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match placeholder(after) {
                Some(name) => {
                    names.push(name);
                    rest = &after[name.len() + 1..];
                }
                None => rest = after,
            }
        }
        names
    }

    /// Substitute every placeholder from `vars`.
    ///
    /// Variables not referenced by the template are ignored.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, DomainError> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match placeholder(after) {
                Some(name) => {
                    let value = vars
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| DomainError::MissingVariable(name.to_string()))?;
                    out.push_str(value);
                    rest = &after[name.len() + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Render into a prompt made of a single user turn
    pub fn render_prompt(&self, vars: &[(&str, &str)]) -> Result<ChatPrompt, DomainError> {
        self.render(vars).map(ChatPrompt::user)
    }
}

/// Return the placeholder name if `after` (text following a `{`) starts with
/// `name}`.
fn placeholder(after: &str) -> Option<&str> {
    let end = after.find('}')?;
    let name = &after[..end];
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}
