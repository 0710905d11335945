//! The host activity.
//!
//! [`NativeHost`] follows the lifecycle of the platform activity hosting the
//! application: `on_create` when launched, `on_new_intent` when relaunched
//! while running, and `configure_engine` once the application's channels
//! exist.

use ghostty_protocol::{MethodCall, MethodResponse, channels};

use crate::channel::ChannelRegistry;
use crate::media::{MediaHandler, MediaStore};
use crate::navigation::{MethodInvoker, NavigationBridge};
use crate::secure::{SecureModeHandler, SecureWindow};

/// Host side of the application's platform integration.
#[derive(Debug)]
pub struct NativeHost<W, I> {
    window: W,
    secure_mode_on_launch: bool,
    registry: ChannelRegistry,
    navigation: NavigationBridge<I>,
}

impl<W, I> NativeHost<W, I>
where
    W: SecureWindow + Clone + 'static,
    I: MethodInvoker,
{
    /// Creates a host for `window`.
    ///
    /// When `secure_mode_on_launch` is set, the window is made secure in
    /// [`on_create`](Self::on_create).
    pub fn new(window: W, secure_mode_on_launch: bool) -> Self {
        Self {
            window,
            secure_mode_on_launch,
            registry: ChannelRegistry::new(),
            navigation: NavigationBridge::detached(),
        }
    }

    /// Handles the activity launch.
    pub fn on_create(&mut self, intent_action: Option<&str>) {
        tracing::info!(
            secure = self.secure_mode_on_launch,
            ?intent_action,
            "host created"
        );
        if self.secure_mode_on_launch {
            self.window.set_secure(true);
        }
        self.navigation.handle_intent(intent_action);
    }

    /// Handles a relaunch while the activity is running.
    pub fn on_new_intent(&mut self, intent_action: Option<&str>) {
        self.navigation.handle_intent(intent_action);
    }

    /// Registers the host channels and attaches the navigation channel.
    ///
    /// A navigation request received before this point is delivered now.
    pub fn configure_engine<M>(&mut self, invoker: I, media: M)
    where
        M: MediaStore + 'static,
    {
        self.registry
            .register(channels::SECURE, SecureModeHandler::new(self.window.clone()));
        self.registry
            .register(channels::MEDIA, MediaHandler::new(media));
        self.navigation.attach(invoker);
        tracing::info!("host channels configured");
    }

    /// Answers a call from the application.
    pub fn handle_call(&mut self, channel: &str, call: &MethodCall) -> MethodResponse {
        self.registry.dispatch(channel, call)
    }

    /// Returns the host window.
    pub const fn window(&self) -> &W {
        &self.window
    }

    /// Returns the navigation bridge.
    pub const fn navigation(&self) -> &NavigationBridge<I> {
        &self.navigation
    }

    /// Returns the navigation bridge for sending requests.
    pub fn navigation_mut(&mut self) -> &mut NavigationBridge<I> {
        &mut self.navigation
    }

    /// Returns the channel registry.
    pub const fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaCollection, MemoryMediaStore, NOTIFY_MEDIA_DELETED};
    use crate::navigation::RecordingInvoker;
    use crate::secure::SecureFlag;
    use ghostty_protocol::{NavigationAction, OPEN_TODO_EDITOR_ACTION};
    use serde_json::json;

    type Host = NativeHost<SecureFlag, RecordingInvoker>;

    #[test]
    fn launch_enables_secure_mode() {
        let window = SecureFlag::default();
        let mut host = Host::new(window.clone(), true);
        host.on_create(None);
        assert!(window.is_secure());
    }

    #[test]
    fn launch_secure_mode_can_be_disabled() {
        let window = SecureFlag::default();
        let mut host = Host::new(window.clone(), false);
        host.on_create(None);
        assert!(!window.is_secure());
    }

    #[test]
    fn launch_intent_waits_for_engine() {
        let mut host = Host::new(SecureFlag::default(), true);
        host.on_create(Some(OPEN_TODO_EDITOR_ACTION));
        assert_eq!(
            host.navigation().pending(),
            Some(NavigationAction::OpenTodoEditor)
        );

        host.configure_engine(RecordingInvoker::default(), MemoryMediaStore::default());

        let invoker = host.navigation().invoker().unwrap();
        assert_eq!(invoker.navigations(), vec![NavigationAction::OpenTodoEditor]);
        assert!(host.navigation().pending().is_none());
    }

    #[test]
    fn new_intent_after_engine_is_sent_directly() {
        let mut host = Host::new(SecureFlag::default(), true);
        host.on_create(None);
        host.configure_engine(RecordingInvoker::default(), MemoryMediaStore::default());

        host.on_new_intent(Some(OPEN_TODO_EDITOR_ACTION));
        host.on_new_intent(Some("android.intent.action.VIEW"));

        let invoker = host.navigation().invoker().unwrap();
        assert_eq!(invoker.calls().len(), 1);
    }

    #[test]
    fn channels_route_after_configure() {
        let window = SecureFlag::default();
        let mut host = Host::new(window.clone(), true);
        host.on_create(None);

        let before = host.handle_call(channels::SECURE, &MethodCall::new("disableSecureMode"));
        assert_eq!(before, MethodResponse::NotImplemented);
        assert!(window.is_secure());

        let mut media = MemoryMediaStore::default();
        media.insert(MediaCollection::Images, "/sdcard/a.png");
        host.configure_engine(RecordingInvoker::default(), media);

        let response = host.handle_call(channels::SECURE, &MethodCall::new("disableSecureMode"));
        assert_eq!(response, MethodResponse::success_null());
        assert!(!window.is_secure());

        let response = host.handle_call(
            channels::MEDIA,
            &MethodCall::with_arguments(NOTIFY_MEDIA_DELETED, json!({ "path": "/sdcard/a.png" })),
        );
        assert_eq!(response, MethodResponse::success(true));
    }

    #[test]
    fn unknown_channel_and_method() {
        let mut host = Host::new(SecureFlag::default(), true);
        host.configure_engine(RecordingInvoker::default(), MemoryMediaStore::default());

        assert_eq!(
            host.handle_call("ghostty/unknown", &MethodCall::new("x")),
            MethodResponse::NotImplemented
        );
        assert_eq!(
            host.handle_call(channels::MEDIA, &MethodCall::new("x")),
            MethodResponse::NotImplemented
        );
        assert!(host.registry().contains(channels::SECURE));
        assert!(host.registry().contains(channels::MEDIA));
    }
}
