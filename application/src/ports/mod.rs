//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod conversation_logger;
pub mod input_field;
pub mod respond_endpoint;
pub mod transcript_view;
pub mod ui_event;
