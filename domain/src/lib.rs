//! Domain layer for respond-chat
//!
//! This crate contains the core chat entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one completed user/bot exchange
//! - **ConversationHistory**: append-only log of turns, sent as context with
//!   each new request
//! - **Transcript**: the visible sequence of rendered entries, including the
//!   transient pending placeholder

pub mod core;
pub mod session;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use session::{history::ConversationHistory, state::SessionState, turn::Turn};
pub use transcript::{
    entities::Transcript,
    entry::{EntryId, EntryKind, PENDING_TEXT, TranscriptEntry},
};
