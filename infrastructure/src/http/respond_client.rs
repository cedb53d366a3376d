//! reqwest client for `POST /respond`

use async_trait::async_trait;
use chat_application::ports::respond_endpoint::{
    EndpointError, RespondEndpoint, RespondReply, RespondRequest,
};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Path of the respond route, relative to the configured base URL.
pub const RESPOND_PATH: &str = "respond";

/// Errors raised while constructing the HTTP endpoint.
#[derive(Error, Debug)]
pub enum HttpEndpointError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Error body returned by the server for malformed requests,
/// e.g. `{"error": "Bad Request", "message": "Request body must be a JSON object"}`.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ServerErrorBody {
    fn describe(&self) -> Option<String> {
        match (&self.error, &self.message) {
            (Some(error), Some(message)) => Some(format!("{}: {}", error, message)),
            (None, Some(message)) => Some(message.clone()),
            (Some(error), None) => Some(error.clone()),
            (None, None) => None,
        }
    }
}

/// [`RespondEndpoint`] that posts JSON to `<base_url>/respond`.
pub struct HttpRespondEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl HttpRespondEndpoint {
    /// Create an endpoint for the service at `base_url`.
    ///
    /// `base_url` may point at the service root (`http://localhost:5000`) or
    /// at the respond route itself. No timeout is applied unless one is
    /// given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpEndpointError> {
        let url = Self::respond_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!("Respond endpoint: {}", url);
        Ok(Self { client, url })
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn respond_url(base_url: &str) -> Result<Url, HttpEndpointError> {
        let invalid = |reason: String| HttpEndpointError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }

        let path = base.path().trim_end_matches('/').to_string();
        if path.ends_with(&format!("/{}", RESPOND_PATH)) {
            base.set_path(&path);
            return Ok(base);
        }

        // Url::join replaces the last segment unless the path ends in '/'
        base.set_path(&format!("{}/", path));
        base.join(RESPOND_PATH).map_err(|e| invalid(e.to_string()))
    }
}

#[async_trait]
impl RespondEndpoint for HttpRespondEndpoint {
    async fn respond(&self, request: &RespondRequest) -> Result<RespondReply, EndpointError> {
        trace!(
            "POST {} ({} history turns)",
            self.url,
            request.chat_history.len()
        );

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                EndpointError::request_failed(format!("Failed to reach {}: {}", self.url, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            EndpointError::request_failed(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ServerErrorBody>(&body)
                .ok()
                .and_then(|b| b.describe());
            return Err(EndpointError::request_failed(match detail {
                Some(detail) => format!("HTTP {}: {}", status.as_u16(), detail),
                None => format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            }));
        }

        serde_json::from_str::<RespondReply>(&body)
            .map_err(|e| EndpointError::request_failed(format!("Invalid response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_domain::{ConversationHistory, Turn};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(message: &str) -> RespondRequest {
        RespondRequest::new(message, &ConversationHistory::new())
    }

    // ==================== URL handling ====================

    #[test]
    fn test_respond_url_from_root() {
        let endpoint = HttpRespondEndpoint::new("http://localhost:5000", None).unwrap();
        assert_eq!(endpoint.url().as_str(), "http://localhost:5000/respond");
    }

    #[test]
    fn test_respond_url_keeps_base_path() {
        let endpoint = HttpRespondEndpoint::new("https://example.com/chat", None).unwrap();
        assert_eq!(endpoint.url().as_str(), "https://example.com/chat/respond");
    }

    #[test]
    fn test_respond_url_already_pointing_at_route() {
        let endpoint = HttpRespondEndpoint::new("http://localhost:5000/respond/", None).unwrap();
        assert_eq!(endpoint.url().as_str(), "http://localhost:5000/respond");
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(matches!(
            HttpRespondEndpoint::new("not a url", None),
            Err(HttpEndpointError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpRespondEndpoint::new("ftp://example.com", None),
            Err(HttpEndpointError::InvalidUrl { .. })
        ));
    }

    // ==================== Round trips ====================

    #[tokio::test]
    async fn test_posts_message_and_history_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/respond"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "message": "and you?",
                "chat_history": [{"user": "hi", "bot": "hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "bot_message": "fine",
                "chat_history": [["hi", "hello"], ["and you?", "fine"]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut history = ConversationHistory::new();
        history.push(Turn::new("hi", "hello"));
        let endpoint = HttpRespondEndpoint::new(&server.uri(), None).unwrap();

        let reply = endpoint
            .respond(&RespondRequest::new("and you?", &history))
            .await
            .unwrap();

        assert_eq!(reply, RespondReply::new("fine"));
    }

    #[tokio::test]
    async fn test_server_error_body_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/respond"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Bad Request",
                "message": "Request body must be a JSON object"
            })))
            .mount(&server)
            .await;

        let endpoint = HttpRespondEndpoint::new(&server.uri(), None).unwrap();
        let err = endpoint.respond(&request("hi")).await.unwrap_err();

        let EndpointError::RequestFailed(reason) = err;
        assert!(reason.contains("400"));
        assert!(reason.contains("Request body must be a JSON object"));
    }

    #[tokio::test]
    async fn test_status_without_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let endpoint = HttpRespondEndpoint::new(&server.uri(), None).unwrap();
        let err = endpoint.respond(&request("hi")).await.unwrap_err();

        assert_eq!(
            err,
            EndpointError::request_failed("HTTP 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_unparseable_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let endpoint = HttpRespondEndpoint::new(&server.uri(), None).unwrap();
        let err = endpoint.respond(&request("hi")).await.unwrap_err();

        let EndpointError::RequestFailed(reason) = err;
        assert!(reason.starts_with("Invalid response body"));
    }

    #[tokio::test]
    async fn test_missing_bot_message_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "hi"})),
            )
            .mount(&server)
            .await;

        let endpoint = HttpRespondEndpoint::new(&server.uri(), None).unwrap();
        assert!(endpoint.respond(&request("hi")).await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        // Bind then release a port so nothing is listening on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let uri = format!("http://127.0.0.1:{}", port);

        let endpoint = HttpRespondEndpoint::new(&uri, None).unwrap();
        let err = endpoint.respond(&request("hi")).await.unwrap_err();

        let EndpointError::RequestFailed(reason) = err;
        assert!(reason.starts_with("Failed to reach"));
    }

    // ==================== Through a chat session ====================

    struct FixedInput(std::sync::Mutex<String>);

    impl chat_application::InputField for FixedInput {
        fn value(&self) -> String {
            self.0.lock().unwrap().clone()
        }
        fn clear(&self) {
            self.0.lock().unwrap().clear();
        }
        fn focus(&self) {}
    }

    #[tokio::test]
    async fn test_session_sends_growing_history() {
        use chat_application::{ChatSession, NoTranscriptView, SendOutcome};
        use std::sync::Arc;

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({"message": "hi", "chat_history": []})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"bot_message": "hello"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "message": "bye",
                "chat_history": [{"user": "hi", "bot": "hello"}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"bot_message": "see you"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let input = Arc::new(FixedInput(std::sync::Mutex::new("hi".to_string())));
        let endpoint = Arc::new(HttpRespondEndpoint::new(&server.uri(), None).unwrap());
        let mut session = ChatSession::new(endpoint, Arc::new(NoTranscriptView), input.clone());

        assert_eq!(
            session.submit_current_input().await,
            SendOutcome::Replied("hello".to_string())
        );
        *input.0.lock().unwrap() = "bye".to_string();
        assert_eq!(
            session.submit_current_input().await,
            SendOutcome::Replied("see you".to_string())
        );

        assert_eq!(
            session.history().turns(),
            &[Turn::new("hi", "hello"), Turn::new("bye", "see you")]
        );
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"bot_message": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let endpoint =
            HttpRespondEndpoint::new(&server.uri(), Some(Duration::from_millis(50))).unwrap();
        assert!(endpoint.respond(&request("hi")).await.is_err());
    }
}
