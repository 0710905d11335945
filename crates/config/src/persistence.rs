//! Configuration and data file reading and writing.
//!
//! # File Formats
//!
//! Files are read with a JSON5 parser, so both formats work:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! Files are always written back as pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./ghostty.json5` or `./ghostty.json`
//! 2. User: `~/.config/ghostty/config.json5` or `~/.config/ghostty/config.json`
//!
//! Widget data (the preference file and logs) lives under the user data
//! directory instead, e.g. `~/.local/share/ghostty/`.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for in the working directory, in priority order.
const LOCAL_CONFIG_FILE_NAMES: &[&str] = &["ghostty.json5", "ghostty.json"];

/// Directory name used under the user config and data directories.
const APP_DIR: &str = "ghostty";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Local files win over the user config directory. Returns `None` if no
/// configuration file exists.
///
/// # Examples
///
/// ```no_run
/// use ghostty_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the user configuration directory, e.g. `~/.config/ghostty/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path, e.g. `~/.config/ghostty/config.json5`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Returns the user data directory holding widget data, e.g. `~/.local/share/ghostty/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a JSON5 (or JSON) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed as `T`.
///
/// # Examples
///
/// ```no_run
/// use ghostty_config::persistence::read_config_file;
/// use ghostty_config::Config;
///
/// # fn main() -> ghostty_config::Result<()> {
/// let config: Config = read_config_file("ghostty.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Reads and parses a file that may not exist yet.
///
/// Returns `Ok(None)` when the file is missing; other I/O and parse errors
/// are reported.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_optional_file<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<Option<T>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(serde_json5::from_str(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes a value to a file as pretty-printed JSON.
///
/// Parent directories are created as needed. The content is written to a
/// sibling temporary file first and renamed into place, so readers never
/// observe a half-written file.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The value cannot be serialized
///
/// # Examples
///
/// ```no_run
/// use ghostty_config::persistence::write_config_file;
/// use ghostty_config::Config;
///
/// # fn main() -> ghostty_config::Result<()> {
/// let config = Config::default();
/// write_config_file("ghostty.json", &config)?;
/// # Ok(())
/// # }
/// ```
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |e: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, content).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json5");
        std::fs::write(
            &path,
            r#"
            {
                // widget name
                name: "test",
                value: 42,
            }
            "#,
        )
        .unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<TestConfig> = read_config_file("/nonexistent/path.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn read_optional_missing_file() {
        let dir = TempDir::new().unwrap();
        let result: Option<TestConfig> = read_optional_file(dir.path().join("missing.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_optional_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let result: Result<Option<TestConfig>> = read_optional_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn write_and_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.json");
        let original = TestConfig {
            name: "test".to_string(),
            value: 42,
        };

        write_config_file(&path, &original).unwrap();
        let loaded: TestConfig = read_config_file(&path).unwrap();

        assert_eq!(original, loaded);
        assert!(!dir.path().join("roundtrip.json.tmp").exists());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dirs").join("config.json");
        let config = TestConfig {
            name: "test".to_string(),
            value: 42,
        };

        write_config_file(&path, &config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn user_dirs_end_with_app_dir() {
        if dirs::config_dir().is_some() {
            assert!(user_config_dir().unwrap().ends_with(APP_DIR));
        }
        if dirs::data_dir().is_some() {
            assert!(user_data_dir().unwrap().ends_with(APP_DIR));
        }
    }
}
