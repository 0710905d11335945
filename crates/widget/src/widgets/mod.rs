//! Ratatui rendering for the widget preview.
//!
//! Each widget is a function rendering state into a buffer, which keeps
//! rendering testable without a terminal.
//!
//! - [`todo_list`]: The home-screen widget drawn from a [`WidgetView`](crate::WidgetView)
//! - [`help`]: The key binding overlay
//! - [`status_bar`]: The footer line
//!
//! # Example
//!
//! ```
//! use ghostty_protocol::dummy::dummy_store;
//! use ghostty_config::WidgetConfig;
//! use ghostty_widget::WidgetProvider;
//! use ghostty_widget::widgets::render_todo_widget;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let provider = WidgetProvider::new(WidgetConfig::default(), dummy_store()).unwrap();
//! let view = provider.view();
//!
//! let area = Rect::new(0, 0, 36, 8);
//! let mut buf = Buffer::empty(area);
//! render_todo_widget(&view, Some(0), area, &mut buf);
//! ```

pub mod help;
pub mod status_bar;
pub mod todo_list;

pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use todo_list::{ADD_BUTTON_LABEL, WidgetHit, hit_test, render_todo_widget};
