//! Configuration management for the ghostty widget.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and provides the file-backed preference store the widget reads its todo
//! snapshot from.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`widget`]: Widget capacity, delimiter, labels, and colors
//! - [`preferences`]: The widget preference file
//! - [`persistence`]: Config and data file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./ghostty.json5` or `./ghostty.json`)
//! 2. User config (`~/.config/ghostty/config.json5` or `~/.config/ghostty/config.json`)
//! 3. Built-in defaults
//!
//! # Format
//!
//! ```json5
//! {
//!   widget: {
//!     capacity: 5,
//!     delimiter: "|||",
//!     all_done_label: "All done!",
//!     completed_color: "#888888",
//!   },
//!   // Defaults to <data dir>/ghostty/HomeWidgetPreferences.json
//!   preferences: { name: "HomeWidgetPreferences" },
//!   secure_mode_on_launch: true,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ghostty_config::{Config, PreferencesFile};
//!
//! # async fn example() -> ghostty_config::Result<()> {
//! let config = Config::load().await?;
//! let prefs = PreferencesFile::open_configured(&config.preferences)?;
//! println!("Reading todos from {}", prefs.path().display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod preferences;
pub mod widget;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use preferences::{PreferencesConfig, PreferencesFile};
pub use widget::WidgetConfig;
