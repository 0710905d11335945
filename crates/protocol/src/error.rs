//! Error types for the ghostty-protocol crate.
//!
//! This module defines the errors that can occur when decoding method
//! channel payloads and protocol values.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A method call was missing a required argument.
    #[error("method `{method}` is missing argument `{name}`")]
    MissingArgument {
        /// The method that was called.
        method: String,
        /// The name of the missing argument.
        name: String,
    },

    /// A method call argument had the wrong type.
    #[error("method `{method}` has an invalid argument `{name}`: {source}")]
    InvalidArgument {
        /// The method that was called.
        method: String,
        /// The name of the offending argument.
        name: String,
        /// Why the argument could not be decoded.
        #[source]
        source: serde_json::Error,
    },

    /// A navigation value did not name a known screen.
    #[error("unknown navigation: {0}")]
    UnknownNavigation(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
