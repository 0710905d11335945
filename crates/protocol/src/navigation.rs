//! Navigation requests sent from the widget to the application.
//!
//! Tapping the widget's add button launches the application with an intent
//! action; the native side turns that action into a [`NavigationAction`] and
//! forwards it over the navigation method channel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Intent action attached to the widget's add button.
pub const OPEN_TODO_EDITOR_ACTION: &str = "OPEN_TODO_EDITOR";

/// A screen the application should navigate to.
///
/// # Examples
///
/// ```
/// use ghostty_protocol::NavigationAction;
///
/// let action = NavigationAction::from_intent_action("OPEN_TODO_EDITOR");
/// assert_eq!(action, Some(NavigationAction::OpenTodoEditor));
/// assert_eq!(NavigationAction::OpenTodoEditor.as_str(), "open_todo_editor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    /// Open the editor to add a new todo.
    OpenTodoEditor,
}

impl NavigationAction {
    /// Returns the value sent as the `navigate` method argument.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenTodoEditor => "open_todo_editor",
        }
    }

    /// Returns the intent action that launches this navigation.
    #[must_use]
    pub const fn intent_action(self) -> &'static str {
        match self {
            Self::OpenTodoEditor => OPEN_TODO_EDITOR_ACTION,
        }
    }

    /// Maps a launch intent action to a navigation, if it is one.
    #[must_use]
    pub fn from_intent_action(action: &str) -> Option<Self> {
        match action {
            OPEN_TODO_EDITOR_ACTION => Some(Self::OpenTodoEditor),
            _ => None,
        }
    }
}

impl fmt::Display for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationAction {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open_todo_editor" => Ok(Self::OpenTodoEditor),
            other => Err(ProtocolError::UnknownNavigation(other.to_string())),
        }
    }
}
