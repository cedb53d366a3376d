//! A completed exchange between the user and the bot

use serde::{Deserialize, Serialize};

/// One completed user/bot exchange (Value Object)
///
/// A `Turn` only exists once the bot reply has been received; a message
/// that is still awaiting its reply has no `Turn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_serializes_as_user_bot_pair() {
        let turn = Turn::new("hi", "hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, serde_json::json!({"user": "hi", "bot": "hello"}));
    }
}
