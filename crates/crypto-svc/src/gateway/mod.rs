//! Crypto gateway: the single seam to the key-management collaborator.
//!
//! Handlers depend on the [`CryptoGateway`] trait, never on a concrete
//! client, so the KMS-backed implementation is swappable — in tests a
//! deterministic in-process fake stands in and simulates context-mismatch
//! failures without network access.

pub mod kms;

#[cfg(test)]
pub mod fake;

pub use kms::KmsGateway;

use async_trait::async_trait;
use common::{EncryptionContext, ServiceError};
use thiserror::Error;

/// Errors produced by the gateway layer. Both map to HTTP 500.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The collaborator rejected or could not complete the encrypt operation.
    #[error("{0}")]
    EncryptionFailed(String),

    /// The collaborator rejected or could not complete the decrypt operation.
    /// Includes authenticated-context mismatch, tampered ciphertext, and
    /// ciphertext that is not valid base64.
    #[error("{0}")]
    DecryptionFailed(String),
}

impl From<GatewayError> for ServiceError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::EncryptionFailed(cause) => ServiceError::EncryptionFailure(cause),
            GatewayError::DecryptionFailed(cause) => ServiceError::DecryptionFailure(cause),
        }
    }
}

/// Narrow capability set over the key-management collaborator.
///
/// The encryption context is bound as authenticated context on encrypt; the
/// collaborator is the sole arbiter of context validity on decrypt — no
/// local equality check is performed before forwarding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CryptoGateway: Send + Sync {
    /// Encrypt `plaintext` under the configured key with `context` bound.
    /// Returns standard-base64 ciphertext.
    async fn encrypt(
        &self,
        plaintext: &[u8],
        context: &EncryptionContext,
    ) -> Result<String, GatewayError>;

    /// Decrypt base64 `ciphertext` under the configured key, forwarding
    /// `context` for the collaborator to authenticate. Returns the recovered
    /// UTF-8 plaintext.
    async fn decrypt(
        &self,
        ciphertext: &str,
        context: &EncryptionContext,
    ) -> Result<String, GatewayError>;
}
