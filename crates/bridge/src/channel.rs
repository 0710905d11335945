//! Method channel routing.
//!
//! Each channel name maps to one [`MethodHandler`]. Calls on a channel with
//! no handler, and calls a handler does not recognize, are answered with
//! [`MethodResponse::NotImplemented`].

use std::collections::HashMap;

use ghostty_protocol::{MethodCall, MethodResponse};

/// Host-side handler for the calls arriving on one channel.
pub trait MethodHandler {
    /// Handles `call` and produces the response sent back to the caller.
    fn handle(&mut self, call: &MethodCall) -> MethodResponse;
}

impl<F> MethodHandler for F
where
    F: FnMut(&MethodCall) -> MethodResponse,
{
    fn handle(&mut self, call: &MethodCall) -> MethodResponse {
        self(call)
    }
}

/// Routes method calls to the handler registered for their channel.
///
/// # Examples
///
/// ```
/// use ghostty_bridge::ChannelRegistry;
/// use ghostty_protocol::{MethodCall, MethodResponse};
///
/// let mut registry = ChannelRegistry::new();
/// registry.register("demo", |call: &MethodCall| match call.method.as_str() {
///     "ping" => MethodResponse::success("pong"),
///     _ => MethodResponse::NotImplemented,
/// });
///
/// let response = registry.dispatch("demo", &MethodCall::new("ping"));
/// assert_eq!(response, MethodResponse::success("pong"));
///
/// let response = registry.dispatch("missing", &MethodCall::new("ping"));
/// assert_eq!(response, MethodResponse::NotImplemented);
/// ```
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: HashMap<String, Box<dyn MethodHandler>>,
}

impl std::fmt::Debug for ChannelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut channels: Vec<&str> = self.channels().collect();
        channels.sort_unstable();
        f.debug_struct("ChannelRegistry")
            .field("channels", &channels)
            .finish()
    }
}

impl ChannelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `channel`, replacing any previous handler.
    pub fn register(&mut self, channel: impl Into<String>, handler: impl MethodHandler + 'static) {
        let channel = channel.into();
        tracing::debug!(%channel, "registering method channel");
        self.handlers.insert(channel, Box::new(handler));
    }

    /// Removes the handler for `channel`. Returns `true` if one was registered.
    pub fn unregister(&mut self, channel: &str) -> bool {
        self.handlers.remove(channel).is_some()
    }

    /// Returns `true` if `channel` has a handler.
    #[must_use]
    pub fn contains(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Returns the registered channel names, in no particular order.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Dispatches `call` to the handler registered for `channel`.
    pub fn dispatch(&mut self, channel: &str, call: &MethodCall) -> MethodResponse {
        let Some(handler) = self.handlers.get_mut(channel) else {
            tracing::debug!(%channel, method = %call.method, "no handler for channel");
            return MethodResponse::NotImplemented;
        };
        let response = handler.handle(call);
        tracing::debug!(%channel, method = %call.method, ?response, "handled method call");
        response
    }
}
