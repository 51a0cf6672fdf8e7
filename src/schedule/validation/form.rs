//! Raw and sanitized task form payloads.

/// Raw task form input as collected by the UI.
///
/// A `None` field stands for a value that was absent or not a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormData {
    /// Time as typed.
    pub time: Option<String>,
    /// Title as typed.
    pub title: Option<String>,
    /// Priority name as selected.
    pub priority: Option<String>,
}

impl TaskFormData {
    /// Creates form input with a time and title and no priority.
    #[must_use]
    pub fn new(time: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            time: Some(time.into()),
            title: Some(title.into()),
            priority: None,
        }
    }

    /// Sets the priority name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Form input after sanitization and before validation.
///
/// Times that parse are in canonical `HH:MM` form, titles are trimmed, and
/// an empty priority is dropped. Values that could not be normalized are
/// kept as typed so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedFormData {
    /// Canonical time, or the raw input when it does not parse.
    pub time: Option<String>,
    /// Trimmed title.
    pub title: Option<String>,
    /// Priority name, if a non-empty one was supplied.
    pub priority: Option<String>,
}
