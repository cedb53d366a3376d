//! Presentation layer for respond-chat
//!
//! This crate contains the CLI definition, the terminal transcript renderer
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, LineInput, ReplCommand};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::TerminalTranscript;
