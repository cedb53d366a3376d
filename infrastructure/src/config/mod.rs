//! Configuration file loading for respond-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `RESPOND_CHAT_<SECTION>__<KEY>` (e.g. `RESPOND_CHAT_ENDPOINT__URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./respond-chat.toml` or `./.respond-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/respond-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_ENDPOINT_URL, FileConfig, FileEndpointConfig, FileLogConfig,
    FileOutputConfig, FileReplConfig, Severity,
};
pub use loader::ConfigLoader;
