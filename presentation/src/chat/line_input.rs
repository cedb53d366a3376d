//! Input field backed by the last line read from the editor

use chat_application::ports::input_field::InputField;
use std::sync::Mutex;

/// [`InputField`] holding the line the user just entered.
///
/// The line editor owns the actual cursor; focus is implicit because the
/// editor prompts again as soon as the session returns.
#[derive(Default)]
pub struct LineInput {
    value: Mutex<String>,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field contents with a freshly read line.
    pub fn set(&self, line: &str) {
        if let Ok(mut value) = self.value.lock() {
            *value = line.to_string();
        }
    }
}

impl InputField for LineInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .map(|value| value.clone())
            .unwrap_or_default()
    }

    fn clear(&self) {
        if let Ok(mut value) = self.value.lock() {
            value.clear();
        }
    }

    fn focus(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_clear() {
        let input = LineInput::new();
        input.set("hello");
        assert_eq!(input.value(), "hello");

        input.clear();
        assert_eq!(input.value(), "");
    }
}
