//! Configuration file loading for topic-router
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOPIC_ROUTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./topic-router.toml` or `./.topic-router.toml`
//! 4. Global: `~/.config/topic-router/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{FileConfig, FileModelsConfig, FileOllamaConfig};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
