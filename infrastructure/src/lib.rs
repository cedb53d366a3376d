//! Infrastructure layer for respond-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileEndpointConfig, FileLogConfig, FileOutputConfig,
    FileReplConfig, Severity,
};
pub use http::{HttpEndpointError, HttpRespondEndpoint};
pub use logging::JsonlConversationLogger;
