//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the ghostty widget and native bridge.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::preferences::PreferencesConfig;
use crate::widget::WidgetConfig;

/// The main configuration struct.
///
/// # Examples
///
/// ```
/// use ghostty_config::{Config, WidgetConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.widget.capacity, 5);
/// assert!(config.secure_mode_on_launch);
///
/// // Create a custom config
/// let config = Config {
///     widget: WidgetConfig::with_capacity(3),
///     secure_mode_on_launch: false,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Widget presentation settings.
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Location of the widget preference file.
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Whether the application window starts with screenshots blocked.
    #[serde(default = "default_secure_mode_on_launch")]
    pub secure_mode_on_launch: bool,
}

fn default_secure_mode_on_launch() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            widget: WidgetConfig::default(),
            preferences: PreferencesConfig::default(),
            secure_mode_on_launch: default_secure_mode_on_launch(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./ghostty.json5` or `./ghostty.json`
    /// 2. User: `~/.config/ghostty/config.json5` or `~/.config/ghostty/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ghostty_config::Config;
    ///
    /// # async fn example() -> ghostty_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Widget shows {} rows", config.widget.capacity);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            None => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ghostty_config::Config;
    ///
    /// # fn example() -> ghostty_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget settings are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_config::{Config, WidgetConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.widget = WidgetConfig::with_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.widget.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.widget, WidgetConfig::default());
        assert!(config.preferences.path.is_none());
        assert!(config.secure_mode_on_launch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"widget": {"capacity": 3}, "secure_mode_on_launch": false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.widget.capacity, 3);
        assert_eq!(config.widget.delimiter, "|||");
        assert!(!config.secure_mode_on_launch);
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghostty.json5");
        std::fs::write(
            &path,
            r##"
            {
                widget: {
                    capacity: 7,
                    completed_color: "#444444",
                },
                preferences: { name: "TestPreferences" },
            }
            "##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.widget.capacity, 7);
        assert_eq!(config.widget.completed_color, "#444444");
        assert_eq!(config.preferences.name, "TestPreferences");
    }

    #[test]
    fn load_from_rejects_invalid_widget() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghostty.json");
        std::fs::write(&path, r#"{"widget": {"delimiter": ""}}"#).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::EmptyDelimiter)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            widget: WidgetConfig::with_capacity(4),
            preferences: PreferencesConfig {
                path: Some(dir.path().join("prefs.json")),
                ..Default::default()
            },
            secure_mode_on_launch: false,
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn preferences_path_not_serialized_when_none() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("\"path\""));
    }
}
