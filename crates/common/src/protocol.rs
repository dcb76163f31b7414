//! Request and response types exchanged over the public HTTP API.
//!
//! Wire field names are camelCase to stay compatible with existing callers of
//! the original serverless endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Encryption context bound into every ciphertext.
///
/// A string→string map with unique keys; order is irrelevant. The
/// key-management service authenticates it at decrypt time — the context
/// supplied on decrypt must match the one bound on encrypt.
pub type EncryptionContext = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptResponse {
    /// Human-readable outcome description.
    pub message: String,
    /// Base64-encoded ciphertext produced by the key-management service.
    pub encrypted_data: String,
    /// The encryption context that was bound into the ciphertext.
    pub encryption_context: EncryptionContext,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResponse {
    /// Human-readable outcome description.
    pub message: String,
    /// Recovered plaintext, UTF-8.
    pub decrypted_data: String,
    /// The encryption context the decryption was performed under.
    pub encryption_context: EncryptionContext,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description safe to expose to callers.
    pub message: String,
    /// Best-effort rendering of the underlying cause, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Construct an [`ErrorResponse`] carrying the cause's message.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(cause.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"`.
    pub status: String,
}
