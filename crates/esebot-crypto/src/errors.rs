//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Missing signature prefix '{prefix}'")]
    MissingSignaturePrefix { prefix: &'static str },
    #[error("Invalid signature format {sig}")]
    InvalidSignatureFormat { sig: String },
    #[error("Invalid HMAC secret key length")]
    InvalidSecretKeyLength,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
