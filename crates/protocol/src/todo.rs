//! Todo records shown by the home-screen widget.
//!
//! The application persists its task list as parallel delimited strings;
//! [`TodoItem`] is the record form those strings are re-modeled into at the
//! ingestion boundary (see [`crate::snapshot`]).

use serde::{Deserialize, Serialize};

/// A single entry of the todo list.
///
/// Identifiers are opaque strings owned by the application; the widget never
/// interprets them beyond requiring one to be present.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::TodoItem;
///
/// let item = TodoItem::new("1", "Buy milk");
/// assert!(!item.completed);
///
/// let done = TodoItem::new("2", "Call mom").with_completed(true);
/// assert!(done.completed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque identifier assigned by the application.
    pub id: String,
    /// Text shown in the widget row.
    pub title: String,
    /// Whether the todo has been checked off.
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }

    /// Returns the same todo with its completion flag set to `completed`.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Flips the completion flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::TodoItem;
    ///
    /// let mut item = TodoItem::new("1", "Water plants");
    /// item.toggle();
    /// assert!(item.completed);
    /// item.toggle();
    /// assert!(!item.completed);
    /// ```
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns the flag encoding used in the persisted snapshot (`"1"` or `"0"`).
    #[must_use]
    pub const fn completed_flag(&self) -> &'static str {
        if self.completed { "1" } else { "0" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_incomplete() {
        let item = TodoItem::new("42", "Write tests");
        assert_eq!(item.id, "42");
        assert_eq!(item.title, "Write tests");
        assert!(!item.completed);
        assert_eq!(item.completed_flag(), "0");
    }

    #[test]
    fn completed_flag_encoding() {
        let item = TodoItem::new("1", "Done").with_completed(true);
        assert_eq!(item.completed_flag(), "1");
    }

    #[test]
    fn deserialize_without_completed_defaults_to_false() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"7","title":"Sleep"}"#).unwrap();
        assert!(!item.completed);
    }

    #[test]
    fn json_format() {
        let item = TodoItem::new("1", "Buy milk").with_completed(true);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"1","title":"Buy milk","completed":true}"#);
    }
}
