//! UI events that drive the chat session
//!
//! The presentation layer translates its native events (form submission,
//! key presses) into these before handing them to
//! [`ChatSession::handle_event`](crate::use_cases::chat_session::ChatSession::handle_event).

/// Keys the chat session distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Events emitted by the UI for the chat session to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The chat form was submitted
    Submit,
    /// A key was pressed in the input field
    KeyPress(Key),
}

impl UiEvent {
    /// Whether this event should submit the current input.
    pub fn triggers_send(&self) -> bool {
        matches!(self, UiEvent::Submit | UiEvent::KeyPress(Key::Enter))
    }
}
