//! Shared protocol types for the ghostty widget and native bridge.
//!
//! This crate defines the types exchanged between the application, the
//! home-screen widget and the native bridge: todo records, the serialized
//! snapshot the application persists for the widget, the preference store
//! contract, navigation actions, and method channel messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`todo`]: The `TodoItem` record
//! - [`snapshot`]: Raw snapshot fields and their parsed `TodoSnapshot` form
//! - [`store`]: Preference keys and the `PreferenceStore` contract
//! - [`navigation`]: Navigation actions sent to the application
//! - [`channel`]: Method channel calls and responses
//! - [`message`]: Widget preview input messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Reading a snapshot out of a preference store:
//!
//! ```
//! use ghostty_protocol::{MemoryStore, PreferenceStore, SnapshotFields, TodoSnapshot, keys};
//!
//! let mut store = MemoryStore::new();
//! store.set_string(keys::TODO_TITLES, "Buy milk|||Call mom");
//! store.set_string(keys::TODO_IDS, "1|||2");
//! store.set_string(keys::TODO_COMPLETED, "1");
//! store.set_string(keys::TODO_COUNT, "1");
//!
//! let fields = SnapshotFields::read_from(&store);
//! let snapshot = TodoSnapshot::parse(&fields, "|||");
//!
//! assert_eq!(snapshot.items().len(), 2);
//! assert!(snapshot.items()[0].completed);
//! assert!(!snapshot.items()[1].completed);
//! ```

pub mod channel;
pub mod dummy;
pub mod error;
pub mod message;
pub mod navigation;
pub mod snapshot;
pub mod store;
pub mod todo;

// Re-export primary types at crate root for convenience
pub use channel::{MethodCall, MethodResponse, channels};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use navigation::{NavigationAction, OPEN_TODO_EDITOR_ACTION};
pub use snapshot::{DEFAULT_DELIMITER, PendingCount, SnapshotFields, TodoSnapshot, split_field};
pub use store::{MemoryStore, PREFERENCES_NAME, PreferenceStore, keys};
pub use todo::TodoItem;
