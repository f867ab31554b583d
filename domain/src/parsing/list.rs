use super::OutputParser;

/// Splits text on commas and trims each item.
///
/// Empty items are kept, so `"a,,b"` yields `["a", "", "b"]` and an empty
/// reply yields a single empty item.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaSeparatedListParser;

impl OutputParser for CommaSeparatedListParser {
    type Output = Vec<String>;

    fn parse(&self, text: &str) -> Vec<String> {
        text.split(',').map(|item| item.trim().to_string()).collect()
    }
}
