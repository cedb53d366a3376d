//! Transcript view port
//!
//! The rendering substrate that shows transcript entries to the user.
//! Only [`ChatSession`](crate::use_cases::chat_session::ChatSession) writes
//! to it.

use chat_domain::{EntryId, TranscriptEntry};

/// Visible container for rendered transcript entries
///
/// Implementations live in the presentation layer (terminal, web UI, etc.).
/// Methods take `&self`; implementations that keep state use interior
/// mutability.
pub trait TranscriptView: Send + Sync {
    /// Render `entry` after the existing entries.
    fn append(&self, entry: &TranscriptEntry);

    /// Remove a previously appended entry. Unknown ids are ignored.
    fn remove(&self, id: EntryId);

    /// Bring the newest entry into view.
    fn scroll_to_bottom(&self);
}

/// View that renders nothing, for headless use.
pub struct NoTranscriptView;

impl TranscriptView for NoTranscriptView {
    fn append(&self, _entry: &TranscriptEntry) {}
    fn remove(&self, _id: EntryId) {}
    fn scroll_to_bottom(&self) {}
}
