//! Input field port

/// Text input the user types messages into
pub trait InputField: Send + Sync {
    /// Current contents of the field.
    fn value(&self) -> String;

    /// Empty the field.
    fn clear(&self);

    /// Give the field keyboard focus.
    fn focus(&self);
}
