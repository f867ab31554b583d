//! Prompt domain
//!
//! Templates with `{name}` placeholders, chat templates built from them, and
//! the fixed instruction texts used by the classifier, the persona routes and
//! the list generator.

mod chat;
mod template;
pub mod templates;

pub use chat::ChatPromptTemplate;
pub use template::PromptTemplate;
