//! Registration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Registration error.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Wraps [`std::io::Error`].
    #[error("I/O error on registration file '{}': {source}", .path.display())]
    IoError {
        /// Registration file.
        path: PathBuf,
        /// Source error.
        source: std::io::Error,
    },

    /// Wraps [`serde_json::Error`].
    #[error("Malformed registration file '{}': {source}", .path.display())]
    SerializationError {
        /// Registration file.
        path: PathBuf,
        /// Source error.
        source: serde_json::Error,
    },
}

/// Result alias for `RegistrationError`.
pub type Result<T, E = RegistrationError> = core::result::Result<T, E>;
