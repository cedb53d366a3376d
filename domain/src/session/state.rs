//! Per-request session state

use serde::{Deserialize, Serialize};

/// Lifecycle of a single send: `Idle → AwaitingResponse → Idle`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingResponse,
}

impl SessionState {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, SessionState::AwaitingResponse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingResponse => "awaiting_response",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
        assert!(!SessionState::Idle.is_awaiting());
        assert!(SessionState::AwaitingResponse.is_awaiting());
    }
}
