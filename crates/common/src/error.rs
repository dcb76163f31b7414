//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::DecryptionFailure`] → 500
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — missing body, invalid JSON, or a missing field.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The key-management collaborator rejected or could not complete encryption.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// The key-management collaborator rejected or could not complete decryption.
    /// Includes authenticated-context mismatch and tampered ciphertext.
    #[error("decryption failure: {0}")]
    DecryptionFailure(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::DecryptionFailure(_) => 500,
            ServiceError::Internal(_) => 500,
        }
    }
}
