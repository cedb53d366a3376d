//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to defaults.

mod endpoint;
mod log;
mod output;
mod repl;

pub use endpoint::{DEFAULT_ENDPOINT_URL, FileEndpointConfig};
pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending field, e.g. `endpoint.url`.
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message,
        }
    }

    fn warning(field: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Respond service settings
    pub endpoint: FileEndpointConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.endpoint.url.trim();
        if url.is_empty() {
            issues.push(ConfigIssue::error(
                "endpoint.url",
                "endpoint.url is empty".to_string(),
            ));
        } else {
            match Url::parse(url) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    issues.push(ConfigIssue::error(
                        "endpoint.url",
                        format!(
                            "endpoint.url: unsupported scheme '{}' (expected http or https)",
                            parsed.scheme()
                        ),
                    ));
                }
                Ok(_) => {}
                Err(e) => issues.push(ConfigIssue::error(
                    "endpoint.url",
                    format!("endpoint.url: '{}' is not a valid URL ({})", url, e),
                )),
            }
        }

        if self.endpoint.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                "endpoint.timeout_secs",
                "endpoint.timeout_secs is 0; every request would time out immediately"
                    .to_string(),
            ));
        }

        if let Some(path) = &self.log.conversation_file
            && path.trim().is_empty()
        {
            issues.push(ConfigIssue::warning(
                "log.conversation_file",
                "log.conversation_file is empty; conversation logging disabled".to_string(),
            ));
        }

        issues
    }

    /// Whether any issue is severe enough to abort startup.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
