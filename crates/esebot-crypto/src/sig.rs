use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::{CryptoError, Result};

/// Prefix GitHub puts in front of the hex digest in `X-Hub-Signature-256`.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Hex-encoded HMAC-SHA256 webhook signature.
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Extract the signature from a `sha256=<hex>` header value.
    pub fn from_header(value: &'a str) -> Result<Self> {
        value
            .strip_prefix(SIGNATURE_PREFIX)
            .filter(|sig| !sig.is_empty())
            .map(Self)
            .ok_or(CryptoError::MissingSignaturePrefix {
                prefix: SIGNATURE_PREFIX,
            })
    }

    /// Check if a signature is valid.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool> {
        let decoded_signature =
            hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;

        hmac.update(body);
        Ok(hmac.verify_slice(&decoded_signature).is_ok())
    }

    /// Compute the header value GitHub would send for a body.
    pub fn sign(body: &[u8], secret: &str) -> Result<String> {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
        hmac.update(body);

        Ok(format!(
            "{}{}",
            SIGNATURE_PREFIX,
            hex::encode(hmac.finalize().into_bytes())
        ))
    }
}
