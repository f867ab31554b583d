//! Fixed instruction texts

use super::chat::ChatPromptTemplate;
use super::template::PromptTemplate;

/// Placeholder the classifier and persona templates substitute
pub const QUESTION_VAR: &str = "question";

/// Placeholder the list template substitutes
pub const TEXT_VAR: &str = "text";

pub const CLASSIFICATION: &str = r#"Given the user question below, classify it as either being about `History`, `Art`, or `Other`.

Do not respond with more than one word.

<question>
{question}
</question>

Classification:"#;

pub const HISTORY_PERSONA: &str = r#"You are an expert in history.
Always answer questions starting with "As Herodotus told me".
Answer only in one sentence, not a single word more and do not say anything except for the answer.
Respond to the following question:

Question: {question}
Answer:"#;

pub const ART_PERSONA: &str = r#"You are an expert in art. Always answer questions starting with "As Leonardo Da Vinci told me". Answer only in one sentence, not a single word more and do not say anything except for the answer.
Respond to the following question:

Question: {question}
Answer:"#;

pub const GENERAL_PERSONA: &str = r#"You are an expert in everything. Always answer questions starting with "As God told me". Answer only in one sentence, not a single word more and do not say anything except for the answer.
Respond to the following question:

Question: {question}
Answer:"#;

pub const LIST_SYSTEM: &str = r#"You are a helpful assistant who generates comma separated lists.
A user will pass in a category, and you should generate 5 objects in that category in a comma separated list.
ONLY return a comma separated list, and nothing more."#;

pub const LIST_HUMAN: &str = "{text}";

/// Template asking for a one-word topic label
pub fn classification() -> PromptTemplate {
    PromptTemplate::new(CLASSIFICATION)
}

/// System + human template asking for five objects in a category
pub fn comma_separated_list() -> ChatPromptTemplate {
    ChatPromptTemplate::system_and_user(LIST_SYSTEM, LIST_HUMAN)
}
