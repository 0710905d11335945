//! Secure-display toggle.
//!
//! While secure mode is on, the host window must be excluded from
//! screenshots and screen recordings. The application flips it over the
//! `ghostty/secure` channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ghostty_protocol::{MethodCall, MethodResponse};

use crate::channel::MethodHandler;

/// Method enabling secure mode.
pub const ENABLE_SECURE_MODE: &str = "enableSecureMode";

/// Method disabling secure mode.
pub const DISABLE_SECURE_MODE: &str = "disableSecureMode";

/// A window whose contents can be hidden from capture.
///
/// Setting the flag to its current value is a no-op.
pub trait SecureWindow {
    /// Turns capture protection on or off.
    fn set_secure(&self, secure: bool);

    /// Returns whether capture protection is on.
    fn is_secure(&self) -> bool;
}

/// A shared in-process secure flag.
///
/// Clones observe the same flag, so the host and its channel handler can
/// each hold one.
///
/// # Examples
///
/// ```
/// use ghostty_bridge::{SecureFlag, SecureWindow};
///
/// let flag = SecureFlag::default();
/// let observer = flag.clone();
///
/// flag.set_secure(true);
/// assert!(observer.is_secure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecureFlag(Arc<AtomicBool>);

impl SecureWindow for SecureFlag {
    fn set_secure(&self, secure: bool) {
        let previous = self.0.swap(secure, Ordering::SeqCst);
        if previous != secure {
            tracing::info!(secure, "secure display changed");
        }
    }

    fn is_secure(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Handles the `ghostty/secure` channel.
#[derive(Debug, Clone)]
pub struct SecureModeHandler<W> {
    window: W,
}

impl<W: SecureWindow> SecureModeHandler<W> {
    /// Creates a handler toggling `window`.
    pub const fn new(window: W) -> Self {
        Self { window }
    }

    /// Returns the controlled window.
    pub const fn window(&self) -> &W {
        &self.window
    }
}

impl<W: SecureWindow> MethodHandler for SecureModeHandler<W> {
    fn handle(&mut self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            ENABLE_SECURE_MODE => {
                self.window.set_secure(true);
                MethodResponse::success_null()
            }
            DISABLE_SECURE_MODE => {
                self.window.set_secure(false);
                MethodResponse::success_null()
            }
            _ => MethodResponse::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_and_disable() {
        let flag = SecureFlag::default();
        let mut handler = SecureModeHandler::new(flag.clone());

        let response = handler.handle(&MethodCall::new(ENABLE_SECURE_MODE));
        assert_eq!(response, MethodResponse::success_null());
        assert!(flag.is_secure());

        let response = handler.handle(&MethodCall::new(DISABLE_SECURE_MODE));
        assert_eq!(response, MethodResponse::success_null());
        assert!(!flag.is_secure());
    }

    #[test]
    fn toggle_is_idempotent() {
        let flag = SecureFlag::default();
        let mut handler = SecureModeHandler::new(flag.clone());

        handler.handle(&MethodCall::new(ENABLE_SECURE_MODE));
        handler.handle(&MethodCall::new(ENABLE_SECURE_MODE));
        assert!(flag.is_secure());

        handler.handle(&MethodCall::new(DISABLE_SECURE_MODE));
        handler.handle(&MethodCall::new(DISABLE_SECURE_MODE));
        assert!(!flag.is_secure());
    }

    #[test]
    fn unknown_method_leaves_flag() {
        let flag = SecureFlag::default();
        flag.set_secure(true);
        let mut handler = SecureModeHandler::new(flag.clone());

        let response = handler.handle(&MethodCall::new("toggleSecureMode"));
        assert_eq!(response, MethodResponse::NotImplemented);
        assert!(flag.is_secure());
    }

    #[test]
    fn flag_starts_off() {
        assert!(!SecureFlag::default().is_secure());
    }
}
