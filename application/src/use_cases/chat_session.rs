//! Chat session use case.
//!
//! [`ChatSession`] mediates between UI events, the visible transcript and the
//! respond endpoint, and owns the [`ConversationHistory`] sent as context
//! with every request.
//!
//! Flow of a send:
//! 1. Render the user's message
//! 2. Render the pending placeholder
//! 3. Call the endpoint with the message and the history so far
//! 4. Remove the placeholder; on success render the reply and record the turn
//!
//! A failed request only clears the placeholder and logs the error. Nothing
//! is shown in the transcript and the history is left untouched.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::input_field::InputField;
use crate::ports::respond_endpoint::{EndpointError, RespondEndpoint, RespondRequest};
use crate::ports::transcript_view::TranscriptView;
use crate::ports::ui_event::UiEvent;
use chat_domain::util::truncate_str;
use chat_domain::{
    ConversationHistory, DomainError, EntryId, EntryKind, SessionState, Transcript, Turn,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Result of one attempt to send the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was blank; nothing was rendered or sent.
    Skipped,
    /// The endpoint replied with this bot message.
    Replied(String),
    /// The request failed; only the pending placeholder was cleared.
    Failed(EndpointError),
}

impl SendOutcome {
    pub fn is_replied(&self) -> bool {
        matches!(self, SendOutcome::Replied(_))
    }
}

/// A single chat session, constructed once per UI lifetime.
///
/// `send_message` borrows the session mutably for the whole round trip, so
/// only one request can be awaiting a response at a time.
pub struct ChatSession {
    endpoint: Arc<dyn RespondEndpoint>,
    view: Arc<dyn TranscriptView>,
    input: Arc<dyn InputField>,
    conversation_logger: Arc<dyn ConversationLogger>,
    history: ConversationHistory,
    transcript: Transcript,
    state: SessionState,
}

impl ChatSession {
    pub fn new(
        endpoint: Arc<dyn RespondEndpoint>,
        view: Arc<dyn TranscriptView>,
        input: Arc<dyn InputField>,
    ) -> Self {
        Self {
            endpoint,
            view,
            input,
            conversation_logger: Arc::new(NoConversationLogger),
            history: ConversationHistory::new(),
            transcript: Transcript::new(),
            state: SessionState::Idle,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Dispatch a UI event. Form submission and Enter send the current
    /// input; every other event is ignored.
    pub async fn handle_event(&mut self, event: UiEvent) -> SendOutcome {
        if !event.triggers_send() {
            return SendOutcome::Skipped;
        }
        self.submit_current_input().await
    }

    /// Read, clear and refocus the input, then send it unless it is blank.
    pub async fn submit_current_input(&mut self) -> SendOutcome {
        let message = self.input.value();
        self.input.clear();
        self.input.focus();

        if message.trim().is_empty() {
            debug!("Ignoring blank submission");
            return SendOutcome::Skipped;
        }

        self.send_message(message).await
    }

    /// Render `message`, ask the endpoint for a reply and record the turn.
    pub async fn send_message(&mut self, message: String) -> SendOutcome {
        info!("Sending message: {}", truncate_str(&message, 100));

        if let Err(e) = self.render_transcript_entry(EntryKind::User(message.clone())) {
            warn!("Could not render user entry: {}", e);
        }
        if let Err(e) = self.render_transcript_entry(EntryKind::Pending) {
            warn!("Could not render pending entry: {}", e);
        }

        let request = RespondRequest::new(message.as_str(), &self.history);
        debug!(
            "Requesting reply with {} prior turns",
            request.chat_history.len()
        );

        self.state = SessionState::AwaitingResponse;
        let result = self.endpoint.respond(&request).await;
        self.state = SessionState::Idle;

        self.remove_pending_entry();

        match result {
            Ok(reply) => {
                let bot_message = reply.bot_message;
                if let Err(e) =
                    self.render_transcript_entry(EntryKind::BotReply(bot_message.clone()))
                {
                    warn!("Could not render bot reply: {}", e);
                }
                self.history.push(Turn::new(message.as_str(), bot_message.as_str()));

                self.conversation_logger.log(ConversationEvent::new(
                    "turn_completed",
                    serde_json::json!({
                        "user": message,
                        "bot": bot_message,
                        "history_len": self.history.len(),
                    }),
                ));

                SendOutcome::Replied(bot_message)
            }
            Err(e) => {
                error!("Respond request failed: {}", e);

                self.conversation_logger.log(ConversationEvent::new(
                    "request_failed",
                    serde_json::json!({
                        "message": message,
                        "error": e.to_string(),
                    }),
                ));

                SendOutcome::Failed(e)
            }
        }
    }

    /// Append an entry to the transcript and show it in the view.
    pub fn render_transcript_entry(&mut self, kind: EntryKind) -> Result<EntryId, DomainError> {
        let entry = self.transcript.push(kind)?;
        self.view.append(entry);
        self.view.scroll_to_bottom();
        Ok(entry.id)
    }

    /// Remove the pending placeholder if present. Safe to call repeatedly.
    pub fn remove_pending_entry(&mut self) {
        if let Some(id) = self.transcript.remove_pending() {
            self.view.remove(id);
        }
    }
}
