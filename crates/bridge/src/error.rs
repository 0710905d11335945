//! Error types for the native bridge.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`MediaStore`](crate::media::MediaStore).
///
/// Channel handlers never surface these to the application; they are
/// logged and folded into the method response.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The file could not be inspected.
    #[error("failed to read media file {path}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The media index refused the operation.
    #[error("media index rejected {operation}: {reason}")]
    Rejected {
        /// The operation that failed (`scan`, `query`, `delete`).
        operation: &'static str,
        /// Reason reported by the index.
        reason: String,
    },

    /// The entry to delete is not in the index.
    #[error("no media entry for {0}")]
    UnknownEntry(String),
}

/// A specialized Result type for media store operations.
pub type Result<T> = std::result::Result<T, MediaError>;
