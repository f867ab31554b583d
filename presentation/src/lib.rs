//! Presentation layer for topic-router
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive category prompt.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, DemoSet, OutputFormat};
pub use input::category::prompt_category;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
