//! Messaging errors.

use thiserror::Error;

/// Messaging error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum MessagingError {
    /// The destination cannot be addressed by the driver.
    #[error("Invalid destination '{destination}'")]
    InvalidDestination { destination: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `MessagingError`.
pub type Result<T, E = MessagingError> = core::result::Result<T, E>;
