//! Sample data for demonstration and tests.
//!
//! This module provides a realistic todo list that the widget preview seeds
//! an empty preference store with.
//!
//! # Examples
//!
//! ```
//! use ghostty_protocol::dummy::dummy_todos;
//!
//! let todos = dummy_todos();
//! assert_eq!(todos.len(), 7);
//! assert_eq!(todos.iter().filter(|t| t.completed).count(), 2);
//! ```

use crate::snapshot::{DEFAULT_DELIMITER, SnapshotFields};
use crate::store::{MemoryStore, PreferenceStore};
use crate::todo::TodoItem;

/// Returns a sample todo list.
///
/// Holds seven todos, two of them completed, so the default five-slot
/// widget shows truncation as well as both row styles.
#[must_use]
pub fn dummy_todos() -> Vec<TodoItem> {
    vec![
        TodoItem::new("t-1", "Buy milk").with_completed(true),
        TodoItem::new("t-2", "Call mom"),
        TodoItem::new("t-3", "Book dentist appointment"),
        TodoItem::new("t-4", "Renew passport").with_completed(true),
        TodoItem::new("t-5", "Water the plants"),
        TodoItem::new("t-6", "Pay electricity bill"),
        TodoItem::new("t-7", "Plan weekend trip"),
    ]
}

/// Returns an in-memory store holding [`dummy_todos`] in snapshot form.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::dummy::dummy_store;
/// use ghostty_protocol::{PreferenceStore, keys};
///
/// let store = dummy_store();
/// assert_eq!(store.get_string(keys::TODO_COUNT).as_deref(), Some("5"));
/// ```
#[must_use]
pub fn dummy_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    seed_store(&mut store);
    store
}

/// Writes [`dummy_todos`] into `store` using the default delimiter.
pub fn seed_store(store: &mut impl PreferenceStore) {
    SnapshotFields::from_items(&dummy_todos(), DEFAULT_DELIMITER).write_to(store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TodoSnapshot;

    #[test]
    fn dummy_ids_are_unique() {
        let todos = dummy_todos();
        let mut ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), todos.len());
    }

    #[test]
    fn dummy_store_parses_back() {
        let store = dummy_store();
        let snapshot = TodoSnapshot::parse(&SnapshotFields::read_from(&store), DEFAULT_DELIMITER);
        assert_eq!(snapshot.items(), dummy_todos().as_slice());
        assert_eq!(snapshot.pending().value(), 5);
    }
}
