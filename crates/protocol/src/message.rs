//! Input messages for the widget preview.
//!
//! This module defines the message enum produced by the preview's input
//! handler and consumed by its update loop.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the widget preview.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::Message;
///
/// let msg = Message::SelectNext;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the row selection up.
    SelectPrevious,
    /// Move the row selection down.
    SelectNext,
    /// Toggle completion of the selected todo in the backing store.
    ToggleSelected,
    /// Press the widget's add button.
    AddTodo,
    /// Re-read the snapshot and re-render, like an update broadcast.
    Refresh,
    /// Flip the secure-display flag.
    ToggleSecureMode,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Close an overlay.
    Escape,
    /// Quit the preview.
    Quit,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message moves the selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_protocol::Message;
    ///
    /// assert!(Message::SelectPrevious.is_navigation());
    /// assert!(!Message::AddTodo.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::SelectPrevious | Self::SelectNext)
    }

    /// Returns `true` if this message should terminate the preview.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if handling this message changes the backing store.
    #[must_use]
    pub fn mutates_store(&self) -> bool {
        matches!(self, Self::ToggleSelected)
    }
}
