//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for respond-chat
#[derive(Parser, Debug)]
#[command(name = "respond-chat")]
#[command(author, version, about = "Terminal chat client for a /respond endpoint")]
#[command(long_about = r#"
respond-chat sends each message you type to a remote /respond endpoint,
together with every earlier exchange of the session, and prints the reply.

Configuration files are loaded from (in priority order):
1. RESPOND_CHAT_* environment variables (e.g. RESPOND_CHAT_ENDPOINT__URL)
2. --config <path>          Explicit config file
3. ./respond-chat.toml      Project-level config
4. ~/.config/respond-chat/config.toml   Global config

Example:
  respond-chat
  respond-chat --endpoint http://localhost:5000
  respond-chat -v --log-file chat.jsonl
"#)]
pub struct Cli {
    /// Base URL of the respond service (overrides config)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show the pending entry as a plain line instead of a spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append completed turns and failed requests to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
