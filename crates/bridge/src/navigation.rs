//! Navigation hand-off to the application.
//!
//! Tapping the widget's add button launches the host with the
//! `OPEN_TODO_EDITOR` intent action. The host forwards it to the application
//! as a `navigate` call on `ghostty/navigation`. The call can arrive before
//! the application's channel exists; in that case it waits in a
//! [`PendingNavigation`] mailbox until the channel attaches.

use ghostty_protocol::{MethodCall, NavigationAction, channels};
use serde_json::Value;

/// Method carrying a navigation action to the application.
pub const NAVIGATE_METHOD: &str = "navigate";

/// Outgoing side of the method channels: calls into the application.
pub trait MethodInvoker {
    /// Sends `call` on `channel`. Delivery is best-effort; no response is
    /// awaited.
    fn invoke(&mut self, channel: &str, call: MethodCall);
}

/// An invoker that records every call it is asked to send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingInvoker {
    calls: Vec<(String, MethodCall)>,
}

impl RecordingInvoker {
    /// Returns the recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[(String, MethodCall)] {
        &self.calls
    }

    /// Returns the navigation actions delivered so far.
    #[must_use]
    pub fn navigations(&self) -> Vec<NavigationAction> {
        self.calls
            .iter()
            .filter(|(channel, call)| channel == channels::NAVIGATION && call.method == NAVIGATE_METHOD)
            .filter_map(|(_, call)| call.arguments.as_str()?.parse().ok())
            .collect()
    }
}

impl MethodInvoker for RecordingInvoker {
    fn invoke(&mut self, channel: &str, call: MethodCall) {
        self.calls.push((channel.to_string(), call));
    }
}

/// A single-slot mailbox for a navigation request that could not be
/// delivered yet.
///
/// Storing replaces whatever was waiting; taking empties the slot.
///
/// # Examples
///
/// ```
/// use ghostty_bridge::PendingNavigation;
/// use ghostty_protocol::NavigationAction;
///
/// let mut pending = PendingNavigation::default();
/// pending.store(NavigationAction::OpenTodoEditor);
///
/// assert_eq!(pending.take(), Some(NavigationAction::OpenTodoEditor));
/// assert_eq!(pending.take(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingNavigation {
    slot: Option<NavigationAction>,
}

impl PendingNavigation {
    /// Puts `action` in the slot. Returns the request it displaced, if any.
    pub fn store(&mut self, action: NavigationAction) -> Option<NavigationAction> {
        self.slot.replace(action)
    }

    /// Removes and returns the waiting request.
    pub fn take(&mut self) -> Option<NavigationAction> {
        self.slot.take()
    }

    /// Returns the waiting request without removing it.
    #[must_use]
    pub const fn peek(&self) -> Option<NavigationAction> {
        self.slot
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Delivers navigation requests, buffering them while detached.
#[derive(Debug, Clone, Default)]
pub struct NavigationBridge<I> {
    invoker: Option<I>,
    pending: PendingNavigation,
}

impl<I: MethodInvoker> NavigationBridge<I> {
    /// Creates a bridge with no application channel.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            invoker: None,
            pending: PendingNavigation { slot: None },
        }
    }

    /// Returns `true` once a channel is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.invoker.is_some()
    }

    /// Returns the request waiting for a channel.
    #[must_use]
    pub const fn pending(&self) -> Option<NavigationAction> {
        self.pending.peek()
    }

    /// Returns the attached invoker.
    #[must_use]
    pub const fn invoker(&self) -> Option<&I> {
        self.invoker.as_ref()
    }

    /// Handles a launch intent action.
    ///
    /// Returns `true` if the action was a navigation request. Other actions,
    /// and launches without an action, are ignored.
    pub fn handle_intent(&mut self, intent_action: Option<&str>) -> bool {
        let Some(action) = intent_action.and_then(NavigationAction::from_intent_action) else {
            tracing::trace!(?intent_action, "intent carries no navigation");
            return false;
        };
        self.navigate(action);
        true
    }

    /// Sends `action` now, or parks it until a channel attaches.
    pub fn navigate(&mut self, action: NavigationAction) {
        match self.invoker.as_mut() {
            Some(invoker) => send(invoker, action),
            None => {
                if let Some(dropped) = self.pending.store(action) {
                    tracing::debug!(%dropped, "replaced pending navigation");
                }
                tracing::debug!(%action, "channel not ready, navigation pending");
            }
        }
    }

    /// Attaches the application channel and flushes the pending request.
    pub fn attach(&mut self, mut invoker: I) {
        if let Some(action) = self.pending.take() {
            tracing::debug!(%action, "flushing pending navigation");
            send(&mut invoker, action);
        }
        self.invoker = Some(invoker);
    }

    /// Detaches the channel, returning it. Later requests are buffered again.
    pub fn detach(&mut self) -> Option<I> {
        self.invoker.take()
    }
}

fn send(invoker: &mut impl MethodInvoker, action: NavigationAction) {
    let call = MethodCall::with_arguments(NAVIGATE_METHOD, Value::from(action.as_str()));
    invoker.invoke(channels::NAVIGATION, call);
}
