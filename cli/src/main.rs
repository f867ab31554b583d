//! CLI entrypoint for topic-router
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use router_application::{
    ClassifyQuestionUseCase, CompletionGateway, GenerateListUseCase, ModelConfig,
    NoRoutingProgress, RouteQuestionUseCase, RoutingProgressNotifier, RunDemoUseCase,
};
use router_domain::{Model, Question};
use router_infrastructure::{ConfigLoader, OllamaGateway, Severity};
use router_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, prompt_category,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in file_config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| file_config.ollama.base_url.clone());
    let mut models: ModelConfig = file_config.models.to_model_config();
    if let Some(name) = &cli.model {
        let model = Model::from_name(name);
        models = models.with_routing(model.clone()).with_listing(model);
    }

    info!(
        "Starting topic-router (server {}, routing model {}, listing model {})",
        base_url, models.routing, models.listing
    );

    // === Dependency Injection ===
    let gateway: Arc<dyn CompletionGateway> = Arc::new(
        OllamaGateway::new(&base_url).context("Invalid Ollama base URL")?,
    );

    let reporter;
    let progress: &dyn RoutingProgressNotifier = if cli.quiet {
        &NoRoutingProgress
    } else {
        reporter = ProgressReporter::new();
        &reporter
    };

    match command {
        Command::List { category } => {
            let category = match category {
                Some(category) => category,
                None => match prompt_category()? {
                    Some(category) => category,
                    None => return Ok(()),
                },
            };

            let items = GenerateListUseCase::new(gateway, models.listing)
                .execute(&category)
                .await?;

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_list(&items)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&items)),
            }
        }
        Command::Classify { question } => {
            let question = Question::new(question);
            let classifier = ClassifyQuestionUseCase::new(gateway, models.routing);

            progress.on_classification_start(&question);
            let label = classifier.execute(&question).await?;
            progress.on_classified(&question, &label);

            match cli.output {
                OutputFormat::Text => println!(
                    "{}",
                    ConsoleFormatter::format_classification(&question, &label)
                ),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&label)),
            }
        }
        Command::Ask { question } => {
            let answer = RouteQuestionUseCase::new(gateway, models.routing)
                .execute_with_progress(Question::new(question), progress)
                .await?;

            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_answer(&answer)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&answer)),
            }
        }
        Command::Demo { set } => {
            let use_case =
                RunDemoUseCase::new(RouteQuestionUseCase::new(gateway, models.routing));
            let report = use_case.execute(set.into(), progress).await?;

            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_demo(&report)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
            }
        }
    }

    Ok(())
}
