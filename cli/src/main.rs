//! CLI entrypoint for respond-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chat_application::{ChatSession, ConversationLogger, NoConversationLogger};
use chat_infrastructure::{
    ConfigLoader, FileConfig, FileOutputConfig, FileReplConfig, HttpRespondEndpoint,
    JsonlConversationLogger, Severity,
};
use chat_presentation::{ChatRepl, Cli, LineInput, OutputConfig, ReplConfig, TerminalTranscript};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Presentation output settings from the `[output]` section and CLI flags.
fn output_config(file: &FileOutputConfig, no_color: bool) -> OutputConfig {
    OutputConfig {
        color: file.color && !no_color,
    }
}

/// Presentation REPL settings from the `[repl]` section and CLI flags.
fn repl_config(file: &FileReplConfig, quiet: bool) -> ReplConfig {
    ReplConfig {
        show_progress: file.show_progress && !quiet,
        history_file: file.history_file.clone(),
    }
}

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

    // Diagnostics go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting respond-chat");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration; see errors above");
    }

    let output = output_config(&config.output, cli.no_color);
    let repl_config = repl_config(&config.repl, cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let endpoint = Arc::new(
        HttpRespondEndpoint::new(&config.endpoint.url, config.endpoint.timeout())
            .context("Failed to create respond endpoint")?,
    );
    let endpoint_url = endpoint.url().to_string();

    let view = Arc::new(
        TerminalTranscript::new()
            .with_color(output.color)
            .with_progress(repl_config.show_progress),
    );
    let input = Arc::new(LineInput::new());

    let log_path = cli.log_file.clone().or_else(|| {
        config
            .log
            .conversation_file
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Into::into)
    });
    let conversation_logger: Arc<dyn ConversationLogger> = match log_path
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let session = ChatSession::new(endpoint, view, input.clone())
        .with_conversation_logger(conversation_logger);

    let mut repl = ChatRepl::new(session, input, endpoint_url)
        .with_history_file(repl_config.history_path());

    repl.run().await?;

    info!(
        "Session ended after {} completed exchanges",
        repl.session().history().len()
    );

    Ok(())
}
