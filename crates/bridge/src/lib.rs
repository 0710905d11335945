//! Native bridge between the ghostty application and its host platform.
//!
//! The application talks to the host over named method channels. This crate
//! provides the host side of those channels and the platform seams they
//! drive:
//!
//! - [`channel`]: The `MethodHandler` trait and the `ChannelRegistry` router
//! - [`secure`]: The secure-display toggle on `ghostty/secure`
//! - [`media`]: Media index scanning and cleanup on `ghostty/media`
//! - [`navigation`]: The pending-navigation mailbox and `ghostty/navigation`
//! - [`host`]: `NativeHost`, wiring the above into an activity lifecycle
//! - [`error`]: Error types for media store operations
//!
//! # Examples
//!
//! ```
//! use ghostty_bridge::host::NativeHost;
//! use ghostty_bridge::media::MemoryMediaStore;
//! use ghostty_bridge::navigation::RecordingInvoker;
//! use ghostty_bridge::secure::{SecureFlag, SecureWindow};
//! use ghostty_protocol::{MethodCall, channels};
//!
//! let window = SecureFlag::default();
//! let mut host = NativeHost::new(window.clone(), true);
//!
//! host.on_create(Some("OPEN_TODO_EDITOR"));
//! assert!(window.is_secure());
//! assert!(host.navigation().pending().is_some());
//!
//! host.configure_engine(RecordingInvoker::default(), MemoryMediaStore::default());
//! assert!(host.navigation().pending().is_none());
//!
//! let response = host.handle_call(channels::SECURE, &MethodCall::new("disableSecureMode"));
//! assert!(response.is_success());
//! assert!(!window.is_secure());
//! ```

pub mod channel;
pub mod error;
pub mod host;
pub mod media;
pub mod navigation;
pub mod secure;

// Re-export primary types at crate root for convenience
pub use channel::{ChannelRegistry, MethodHandler};
pub use error::{MediaError, Result};
pub use host::NativeHost;
pub use media::{MediaCollection, MediaHandler, MediaStore, MediaUri, MemoryMediaStore};
pub use navigation::{MethodInvoker, NavigationBridge, PendingNavigation, RecordingInvoker};
pub use secure::{SecureFlag, SecureModeHandler, SecureWindow};
