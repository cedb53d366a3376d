//! Terminal output

pub mod terminal_transcript;

pub use terminal_transcript::TerminalTranscript;
