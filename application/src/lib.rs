//! Application layer for respond-chat
//!
//! This crate contains the chat session use case and the ports it talks
//! through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    input_field::InputField,
    respond_endpoint::{EndpointError, RespondEndpoint, RespondReply, RespondRequest},
    transcript_view::{NoTranscriptView, TranscriptView},
    ui_event::{Key, UiEvent},
};
pub use use_cases::chat_session::{ChatSession, SendOutcome};
