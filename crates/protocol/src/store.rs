//! Preference store contract shared by the application and the widget.
//!
//! The application writes the todo snapshot as plain strings into a
//! key-value preference store; the widget reads the same keys back. This
//! module names those keys and defines the minimal store interface the
//! widget needs, plus an in-memory implementation.

use std::collections::HashMap;

/// Name of the preference file the application writes widget data into.
pub const PREFERENCES_NAME: &str = "HomeWidgetPreferences";

/// Well-known preference keys holding the serialized todo snapshot.
pub mod keys {
    /// Delimiter-joined todo titles, in display order.
    pub const TODO_TITLES: &str = "todo_titles";
    /// Delimiter-joined todo identifiers, parallel to the titles.
    pub const TODO_IDS: &str = "todo_ids";
    /// Delimiter-joined completion flags (`"1"` = complete), parallel to the titles.
    pub const TODO_COMPLETED: &str = "todo_completed";
    /// Decimal count of pending todos, as computed by the application.
    pub const TODO_COUNT: &str = "todo_count";

    /// All snapshot keys, in the order the application writes them.
    pub const ALL: [&str; 4] = [TODO_TITLES, TODO_IDS, TODO_COMPLETED, TODO_COUNT];
}

/// A string key-value store.
///
/// Implementations own their own persistence; the widget only ever reads
/// whole string values and treats a missing key as absent data.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_string(&mut self, key: &str, value: &str);
}

/// An in-memory [`PreferenceStore`].
///
/// # Examples
///
/// ```
/// use ghostty_protocol::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.get_string("todo_count"), None);
///
/// store.set_string("todo_count", "3");
/// assert_eq!(store.get_string("todo_count").as_deref(), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
