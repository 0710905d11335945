//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation, and while persisting the widget
//! preference file.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The widget slot capacity is out of range.
    #[error("invalid widget capacity {capacity}: must be between 1 and {max}")]
    InvalidCapacity {
        /// The configured capacity.
        capacity: usize,
        /// The largest supported capacity.
        max: usize,
    },

    /// The snapshot delimiter is empty.
    #[error("invalid snapshot delimiter: delimiter cannot be empty")]
    EmptyDelimiter,

    /// A color setting is not a `#RRGGBB` hex string.
    #[error("invalid color for `{field}`: {value:?} is not a #RRGGBB hex color")]
    InvalidColor {
        /// The setting that holds the color.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
