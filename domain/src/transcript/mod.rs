//! Transcript domain: the visible sequence of rendered chat entries.
//!
//! - [`entry::TranscriptEntry`] — one rendered entry (user, bot reply, or pending)
//! - [`entities::Transcript`] — ordered entries with at most one pending entry
//!
//! The transcript is UI state only; it is never sent to the endpoint.

pub mod entities;
pub mod entry;
