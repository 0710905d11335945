//! Home-screen widget settings.
//!
//! This module provides the [`WidgetConfig`] type: how many rows the widget
//! shows, how the snapshot lists are delimited, and the texts and colors
//! used to present them.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default number of todo rows the widget shows.
pub const DEFAULT_CAPACITY: usize = 5;

/// Largest supported number of todo rows.
pub const MAX_CAPACITY: usize = 20;

/// Default summary text when nothing is pending.
pub const DEFAULT_ALL_DONE_LABEL: &str = "All done!";

/// Default suffix appended to the pending count in the summary.
pub const DEFAULT_PENDING_SUFFIX: &str = " pending";

/// Default text shown when the todo list is empty.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No todos yet";

/// Default text color for incomplete todos.
pub const DEFAULT_ACTIVE_COLOR: &str = "#FFFFFF";

/// Default text color for completed todos.
pub const DEFAULT_COMPLETED_COLOR: &str = "#888888";

/// Configuration for the todo widget.
///
/// # Examples
///
/// ```
/// use ghostty_config::WidgetConfig;
///
/// let config = WidgetConfig::default();
/// assert_eq!(config.capacity, 5);
/// assert_eq!(config.delimiter, "|||");
/// assert_eq!(config.pending_label("3"), "3 pending");
///
/// let config = WidgetConfig::with_capacity(8);
/// assert_eq!(config.capacity, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Number of todo rows (slots) the widget renders.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Delimiter joining the snapshot's list fields.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Summary text shown when the pending count is zero.
    #[serde(default = "default_all_done_label")]
    pub all_done_label: String,

    /// Text appended to the pending count in the summary.
    #[serde(default = "default_pending_suffix")]
    pub pending_suffix: String,

    /// Text shown when there are no todos.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// `#RRGGBB` text color of incomplete todos.
    #[serde(default = "default_active_color")]
    pub active_color: String,

    /// `#RRGGBB` text color of completed todos.
    #[serde(default = "default_completed_color")]
    pub completed_color: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_delimiter() -> String {
    ghostty_protocol::DEFAULT_DELIMITER.to_string()
}

fn default_all_done_label() -> String {
    DEFAULT_ALL_DONE_LABEL.to_string()
}

fn default_pending_suffix() -> String {
    DEFAULT_PENDING_SUFFIX.to_string()
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

fn default_active_color() -> String {
    DEFAULT_ACTIVE_COLOR.to_string()
}

fn default_completed_color() -> String {
    DEFAULT_COMPLETED_COLOR.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            delimiter: default_delimiter(),
            all_done_label: default_all_done_label(),
            pending_suffix: default_pending_suffix(),
            empty_message: default_empty_message(),
            active_color: default_active_color(),
            completed_color: default_completed_color(),
        }
    }
}

impl WidgetConfig {
    /// Creates a default configuration with a different row count.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Formats the summary shown while todos are pending.
    ///
    /// `count` is used exactly as the application wrote it.
    #[must_use]
    pub fn pending_label(&self, count: &str) -> String {
        format!("{count}{}", self.pending_suffix)
    }

    /// Returns the parsed active color.
    ///
    /// # Errors
    ///
    /// Returns an error if `active_color` is not a `#RRGGBB` string.
    pub fn active_rgb(&self) -> Result<(u8, u8, u8)> {
        parse_color("active_color", &self.active_color)
    }

    /// Returns the parsed completed color.
    ///
    /// # Errors
    ///
    /// Returns an error if `completed_color` is not a `#RRGGBB` string.
    pub fn completed_rgb(&self) -> Result<(u8, u8, u8)> {
        parse_color("completed_color", &self.completed_color)
    }

    /// Validates the widget configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `capacity` is zero or above [`MAX_CAPACITY`]
    /// - `delimiter` is empty
    /// - either color is not a `#RRGGBB` string
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_config::WidgetConfig;
    ///
    /// assert!(WidgetConfig::default().validate().is_ok());
    /// assert!(WidgetConfig::with_capacity(0).validate().is_err());
    /// assert!(WidgetConfig::with_capacity(21).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::InvalidCapacity {
                capacity: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        self.active_rgb()?;
        self.completed_rgb()?;
        Ok(())
    }
}

/// Parses a `#RRGGBB` hex color.
///
/// # Examples
///
/// ```
/// use ghostty_config::widget::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#888888"), Some((0x88, 0x88, 0x88)));
/// assert_eq!(parse_hex_color("#fFfFfF"), Some((255, 255, 255)));
/// assert_eq!(parse_hex_color("888888"), None);
/// assert_eq!(parse_hex_color("#8888"), None);
/// ```
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_color(field: &'static str, value: &str) -> Result<(u8, u8, u8)> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.delimiter, "|||");
        assert_eq!(config.all_done_label, "All done!");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pending_label_keeps_count_text() {
        let config = WidgetConfig::default();
        assert_eq!(config.pending_label("1"), "1 pending");
        assert_eq!(config.pending_label("007"), "007 pending");
    }

    #[test]
    fn validate_capacity_bounds() {
        assert!(WidgetConfig::with_capacity(1).validate().is_ok());
        assert!(WidgetConfig::with_capacity(MAX_CAPACITY).validate().is_ok());

        let err = WidgetConfig::with_capacity(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity { capacity: 0, .. }));

        let err = WidgetConfig::with_capacity(MAX_CAPACITY + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity { .. }));
    }

    #[test]
    fn validate_rejects_empty_delimiter() {
        let config = WidgetConfig {
            delimiter: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyDelimiter)));
    }

    #[test]
    fn validate_rejects_bad_colors() {
        let config = WidgetConfig {
            completed_color: "grey".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColor { field: "completed_color", .. }
        ));
    }

    #[test]
    fn parse_hex_color_rejects_non_hex() {
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#+12345"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn default_colors_parse() {
        let config = WidgetConfig::default();
        assert_eq!(config.active_rgb().unwrap(), (255, 255, 255));
        assert_eq!(config.completed_rgb().unwrap(), (136, 136, 136));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"capacity": 3}"#).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.delimiter, "|||");
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }
}
