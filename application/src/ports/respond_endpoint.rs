//! Respond endpoint port
//!
//! Defines the interface for the remote service that answers chat messages.

use async_trait::async_trait;
use chat_domain::{ConversationHistory, Turn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the respond endpoint.
///
/// Network failures and unparseable responses are deliberately not
/// distinguished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl EndpointError {
    pub fn request_failed(reason: impl Into<String>) -> Self {
        EndpointError::RequestFailed(reason.into())
    }
}

/// Request body sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondRequest {
    /// The message the user just submitted.
    pub message: String,
    /// Every completed turn before this message, oldest first.
    pub chat_history: Vec<Turn>,
}

impl RespondRequest {
    pub fn new(message: impl Into<String>, history: &ConversationHistory) -> Self {
        Self {
            message: message.into(),
            chat_history: history.turns().to_vec(),
        }
    }
}

/// Successful response from the endpoint.
///
/// Extra fields in the response body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondReply {
    pub bot_message: String,
}

impl RespondReply {
    pub fn new(bot_message: impl Into<String>) -> Self {
        Self {
            bot_message: bot_message.into(),
        }
    }
}

/// Gateway to the respond service
///
/// Each call is a single request/response round trip: no retries and no
/// streaming. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait RespondEndpoint: Send + Sync {
    /// Send a message together with the prior history and wait for the reply.
    async fn respond(&self, request: &RespondRequest) -> Result<RespondReply, EndpointError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let mut history = ConversationHistory::new();
        history.push(Turn::new("hi", "hello"));

        let request = RespondRequest::new("and you?", &history);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "message": "and you?",
                "chat_history": [{"user": "hi", "bot": "hello"}]
            })
        );
    }

    #[test]
    fn test_reply_ignores_extra_fields() {
        let body = r#"{"bot_message": "hello", "chat_history": [["hi", "hello"]]}"#;
        let reply: RespondReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply, RespondReply::new("hello"));
    }

    #[test]
    fn test_reply_requires_bot_message() {
        let result = serde_json::from_str::<RespondReply>(r#"{"message": "nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_failed_display() {
        let err = EndpointError::request_failed("connection refused");
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
