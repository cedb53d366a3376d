//! Transcript entry value objects

use serde::{Deserialize, Serialize};

/// Placeholder text shown while awaiting a reply.
pub const PENDING_TEXT: &str = "Finding the answer...";

/// Class shared by every rendered entry.
pub const MESSAGE_CLASS: &str = "message";

/// Class of the element holding an entry's text.
pub const MESSAGE_CONTENT_CLASS: &str = "message-content";

/// Handle identifying one rendered transcript entry.
///
/// Ids are assigned by [`Transcript`](super::entities::Transcript) in
/// increasing order and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a transcript entry shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum EntryKind {
    /// A message typed by the user
    User(String),
    /// A reply received from the endpoint
    BotReply(String),
    /// Transient placeholder while a request is in flight
    Pending,
}

impl EntryKind {
    /// Style class distinguishing this kind of entry.
    pub fn style_class(&self) -> &'static str {
        match self {
            EntryKind::User(_) => "usermessage",
            EntryKind::BotReply(_) => "apimessage",
            EntryKind::Pending => "typing-indicator",
        }
    }

    /// Text rendered inside the entry.
    pub fn text(&self) -> &str {
        match self {
            EntryKind::User(text) | EntryKind::BotReply(text) => text,
            EntryKind::Pending => PENDING_TEXT,
        }
    }

    /// Sender label shown next to the entry.
    pub fn sender(&self) -> &'static str {
        match self {
            EntryKind::User(_) => "You",
            EntryKind::BotReply(_) | EntryKind::Pending => "Bot",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, EntryKind::Pending)
    }
}

/// One rendered entry in the transcript (Value Object)
///
/// Entries are never mutated after creation; they are only appended or,
/// for the pending placeholder, removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl TranscriptEntry {
    pub fn new(id: EntryId, kind: EntryKind) -> Self {
        Self { id, kind }
    }

    /// Full class list for the entry, e.g. `["message", "usermessage"]`.
    pub fn classes(&self) -> [&'static str; 2] {
        [MESSAGE_CLASS, self.kind.style_class()]
    }
}
