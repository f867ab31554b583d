//! Reads a category name from the terminal

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub const CATEGORY_PROMPT: &str = "Please enter a category name: ";

/// Ask for a category on stdin.
///
/// Returns `Ok(None)` when the user presses Ctrl-C or Ctrl-D instead of
/// answering.
pub fn prompt_category() -> rustyline::Result<Option<String>> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline(CATEGORY_PROMPT) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}
