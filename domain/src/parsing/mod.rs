//! Output parsers applied to the model's raw text.
//!
//! | Parser | Output | Used by |
//! |--------|--------|---------|
//! | [`StringOutputParser`] | the text unchanged | classifier |
//! | [`CommaSeparatedListParser`] | trimmed items | list generator |

mod list;

pub use list::CommaSeparatedListParser;

/// Turns a completion's text into a typed value
pub trait OutputParser {
    type Output;

    fn parse(&self, text: &str) -> Self::Output;
}

/// Identity parser: returns the text as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct StringOutputParser;

impl OutputParser for StringOutputParser {
    type Output = String;

    fn parse(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_parser_is_identity() {
        assert_eq!(StringOutputParser.parse(" Art\n"), " Art\n");
        assert_eq!(StringOutputParser.parse(""), "");
    }
}
