//! Logic errors.

use thiserror::Error;

/// Logic error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A message could not be delivered. The message is kept for diagnosis.
    #[error("Could not deliver message to '{destination}': {source}\n  message: {message}")]
    DeliveryError {
        destination: String,
        message: String,
        source: esebot_messaging_interface::MessagingError,
    },
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
