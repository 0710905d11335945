//! File-backed widget preference store.
//!
//! The application and the widget share a flat string key-value file
//! (`HomeWidgetPreferences.json` by default). [`PreferencesFile`] loads it,
//! serves reads through [`PreferenceStore`], and writes changes back on
//! [`save`](PreferencesFile::save).
//!
//! # Examples
//!
//! ```no_run
//! use ghostty_config::PreferencesFile;
//! use ghostty_protocol::{PreferenceStore, keys};
//!
//! # fn main() -> ghostty_config::Result<()> {
//! let mut prefs = PreferencesFile::open("/tmp/HomeWidgetPreferences.json")?;
//! prefs.set_string(keys::TODO_COUNT, "0");
//! prefs.save()?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ghostty_protocol::PreferenceStore;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{read_optional_file, user_data_dir, write_config_file};

/// Where the widget preference file lives.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use ghostty_config::PreferencesConfig;
///
/// let config = PreferencesConfig {
///     path: Some(PathBuf::from("/data/prefs.json")),
///     ..Default::default()
/// };
/// assert_eq!(config.resolve_path().unwrap(), PathBuf::from("/data/prefs.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Preference file name, without extension.
    #[serde(default = "default_name")]
    pub name: String,

    /// Explicit file path. When unset, the file is
    /// `<user data dir>/ghostty/<name>.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_name() -> String {
    ghostty_protocol::PREFERENCES_NAME.to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            path: None,
        }
    }
}

impl PreferencesConfig {
    /// Returns the preference file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path is set and the home directory
    /// cannot be determined.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(user_data_dir()?.join(format!("{}.json", self.name))),
        }
    }
}

/// A [`PreferenceStore`] persisted as a flat JSON object of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesFile {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferencesFile {
    /// Opens the preference file at `path`.
    ///
    /// A missing file opens as an empty store; nothing is written until
    /// [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// hold a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = read_optional_file(&path)?.unwrap_or_default();
        tracing::debug!(path = %path.display(), "opened widget preferences");
        Ok(Self { path, values })
    }

    /// Opens the preference file described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the file cannot be
    /// read.
    pub fn open_configured(config: &PreferencesConfig) -> Result<Self> {
        Self::open(config.resolve_path()?)
    }

    /// Re-reads the file, discarding unsaved changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn reload(&mut self) -> Result<()> {
        self.values = read_optional_file(&self.path)?.unwrap_or_default();
        Ok(())
    }

    /// Writes the current values to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        write_config_file(&self.path, &self.values)?;
        tracing::debug!(path = %self.path.display(), keys = self.values.len(), "saved widget preferences");
        Ok(())
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for PreferencesFile {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostty_protocol::keys;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = PreferencesFile::open(dir.path().join("prefs.json")).unwrap();
        assert!(prefs.is_empty());
        assert!(prefs.get_string(keys::TODO_TITLES).is_none());
    }

    #[test]
    fn save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = PreferencesFile::open(&path).unwrap();
        prefs.set_string(keys::TODO_TITLES, "A|||B");
        prefs.set_string(keys::TODO_COUNT, "2");
        prefs.save().unwrap();

        let reopened = PreferencesFile::open(&path).unwrap();
        assert_eq!(reopened, prefs);
        assert_eq!(reopened.get_string(keys::TODO_COUNT).as_deref(), Some("2"));
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"todo_count": "4"}"#).unwrap();

        let mut prefs = PreferencesFile::open(&path).unwrap();
        prefs.set_string(keys::TODO_COUNT, "9");
        prefs.reload().unwrap();

        assert_eq!(prefs.get_string(keys::TODO_COUNT).as_deref(), Some("4"));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"todo_count": 4}"#).unwrap();

        assert!(PreferencesFile::open(&path).is_err());
    }

    #[test]
    fn default_path_uses_name() {
        if dirs::data_dir().is_some() {
            let path = PreferencesConfig::default().resolve_path().unwrap();
            assert!(path.ends_with("ghostty/HomeWidgetPreferences.json"));
        }
    }
}
