//! The ghostty home-screen todo widget.
//!
//! This crate turns the todo snapshot the application persists into what
//! the widget displays, and hosts a Ratatui preview of the widget.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`projection`]: The pure snapshot-to-slots projection
//! - [`surface`]: Resolved widget views and the `RenderSurface` contract
//! - [`provider`]: The update flow driven by launcher broadcasts
//! - [`widgets`]: Ratatui rendering of a widget view
//! - [`app`]: The interactive preview and its run loop
//! - [`state`]: Preview selection and overlay state
//! - [`event`]: Event polling and key mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`logging`]: File-backed tracing setup
//!
//! # Example
//!
//! ```no_run
//! use ghostty_config::Config;
//! use ghostty_protocol::dummy::dummy_store;
//! use ghostty_widget::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut app = App::new(&Config::default(), dummy_store())?;
//!
//!     terminal::install_panic_hook();
//!     let mut session = terminal::TerminalSession::start()?;
//!     let result = app.run(session.terminal_mut()).await;
//!     session.finish()?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod logging;
pub mod projection;
pub mod provider;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, PreviewStore};
pub use projection::{Projection, SlotRenderState, SlotStyle, Summary, project};
pub use provider::{WidgetBroadcast, WidgetProvider};
pub use state::PreviewState;
pub use surface::{RecordingSurface, RenderSurface, WidgetId, WidgetView};
