//! Interactive chat module
//!
//! Provides a line-editor based chat interface driving a
//! [`ChatSession`](chat_application::ChatSession).

mod line_input;
mod repl;

pub use line_input::LineInput;
pub use repl::{ChatRepl, ReplCommand};
