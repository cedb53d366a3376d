//! HTTP adapter for the respond endpoint.
//!
//! Provides [`HttpRespondEndpoint`], a reqwest-backed implementation of the
//! [`RespondEndpoint`](chat_application::RespondEndpoint) port.

mod respond_client;

pub use respond_client::{HttpEndpointError, HttpRespondEndpoint, RESPOND_PATH};
