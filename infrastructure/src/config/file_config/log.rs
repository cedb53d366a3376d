//! Conversation log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

/// Raw conversation log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file receiving completed turns and failed requests
    pub conversation_file: Option<String>,
}
