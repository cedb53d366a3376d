//! Chat session domain.
//!
//! - [`turn::Turn`] — one completed user/bot exchange
//! - [`history::ConversationHistory`] — append-only log of completed turns
//! - [`state::SessionState`] — whether a request is in flight

pub mod history;
pub mod state;
pub mod turn;
