//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use router_application::DemoQuestionSet;
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON output
    Json,
}

/// Which built-in question set the demo runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoSet {
    /// guitar / world war 2 / 2 + 2
    Basic,
    /// work of art / Mongols / 2 + 2
    Branch,
}

impl From<DemoSet> for DemoQuestionSet {
    fn from(set: DemoSet) -> Self {
        match set {
            DemoSet::Basic => DemoQuestionSet::Basic,
            DemoSet::Branch => DemoQuestionSet::Branch,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate five objects in a category as a comma separated list
    List {
        /// Category name (prompted for on stdin when omitted)
        category: Option<String>,
    },
    /// Classify a question as History, Art or Other
    Classify {
        /// The question to classify
        question: String,
    },
    /// Classify a question and answer it with the matching persona
    Ask {
        /// The question to answer
        question: String,
    },
    /// Run the built-in example questions
    Demo {
        /// Question set to run
        #[arg(long, value_enum, default_value = "basic")]
        set: DemoSet,
    },
}

/// CLI arguments for topic-router
#[derive(Parser, Debug)]
#[command(name = "topic-router")]
#[command(author, version, about = "Classify questions by topic and answer them with a matching persona")]
#[command(long_about = r#"
topic-router sends questions to a local Ollama model in two steps:

1. Classification: the model labels the question as History, Art or Other
2. Routing: the label picks a persona prompt (Herodotus, Leonardo Da Vinci
   or God) that answers the original question in one sentence

Configuration files are loaded from (in priority order):
1. TOPIC_ROUTER_* environment variables (e.g. TOPIC_ROUTER_OLLAMA__BASE_URL)
2. --config <path>     Explicit config file
3. ./topic-router.toml Project-level config
4. ~/.config/topic-router/config.toml   Global config

Example:
  topic-router ask "how did world war 2 begin?"
  topic-router classify "how do I play a guitar?"
  topic-router list fruits
  topic-router demo --set branch
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ollama base URL (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Model to use (overrides the configured model for the command)
    #[arg(short, long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
