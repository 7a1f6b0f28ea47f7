//! CLI entrypoint for twin-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twin_application::{ChatWidget, ConversationLogger};
use twin_infrastructure::{ConfigLoader, FileConfig, HttpChatEndpoint, JsonlConversationLogger};
use twin_presentation::{
    ChatRepl, Cli, ConsoleFormatter, DisplayConfig, OutputFormat, ReplConfig, SpinnerProgress,
};

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
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    if let Some(url) = &cli.api_url {
        config.endpoint.api_url = url.clone();
    }
    if let Some(title) = &cli.title {
        config.display.title = title.clone();
    }
    config.validate().context("Invalid configuration")?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!("Starting twin-chat against {}", config.endpoint.api_url);

    // === Dependency Injection ===
    let endpoint = Arc::new(HttpChatEndpoint::new(&config.endpoint.api_url));
    let mut widget = ChatWidget::new(endpoint);

    if let Some(path) = &cli.conversation_log {
        if let Some(logger) = JsonlConversationLogger::new(path) {
            info!("Conversation log: {}", logger.path().display());
            let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
            widget = widget.with_conversation_logger(logger);
        }
    }
    let widget = Arc::new(widget);

    let display = DisplayConfig {
        title: config.display.title,
        subtitle: config.display.subtitle,
        color: config.display.color,
    };
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file,
    };

    // One-shot mode
    if let Some(message) = cli.message {
        if repl_config.show_progress && cli.output == OutputFormat::Text {
            widget
                .submit_with_progress(&message, &SpinnerProgress::new())
                .await;
        } else {
            widget.submit(&message).await;
        }

        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_transcript(&widget.messages()),
            OutputFormat::Json => ConsoleFormatter::format_json(&widget.messages()),
        };
        println!("{}", output);
        return Ok(());
    }

    // Chat mode
    let repl = ChatRepl::new(widget)
        .with_display(display)
        .with_repl_config(repl_config);

    repl.run().await?;

    Ok(())
}
