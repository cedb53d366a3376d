//! Endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the respond service.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000";

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL of the respond service
    pub url: String,
    /// Request timeout in seconds (unset = wait indefinitely)
    pub timeout_secs: Option<u64>,
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: None,
        }
    }
}
