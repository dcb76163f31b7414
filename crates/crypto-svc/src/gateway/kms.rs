//! [`KmsGateway`]: AWS KMS-backed implementation of [`CryptoGateway`].
//!
//! The key identifier is injected once at construction from validated
//! configuration; it is never re-read from the environment per request.
//! Plaintext and ciphertext bytes are never logged — diagnostic events carry
//! only non-sensitive metadata such as the number of context keys.

use async_trait::async_trait;
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use common::EncryptionContext;
use tracing::{debug, warn};

use super::{CryptoGateway, GatewayError};

/// KMS-backed crypto gateway.
pub struct KmsGateway {
    client: aws_sdk_kms::Client,
    key_id: String,
}

impl KmsGateway {
    /// Create a gateway bound to `key_id` for all operations.
    pub fn new(client: aws_sdk_kms::Client, key_id: String) -> Self {
        Self { client, key_id }
    }
}

#[async_trait]
impl CryptoGateway for KmsGateway {
    async fn encrypt(
        &self,
        plaintext: &[u8],
        context: &EncryptionContext,
    ) -> Result<String, GatewayError> {
        let mut req = self
            .client
            .encrypt()
            .key_id(&self.key_id)
            .plaintext(Blob::new(plaintext));
        for (k, v) in context {
            req = req.encryption_context(k, v);
        }

        let output = req.send().await.map_err(|e| {
            warn!(context_keys = context.len(), "KMS encrypt call failed");
            GatewayError::EncryptionFailed(DisplayErrorContext(e).to_string())
        })?;

        let blob = output
            .ciphertext_blob()
            .ok_or_else(|| GatewayError::EncryptionFailed("KMS returned no ciphertext".into()))?;

        debug!(context_keys = context.len(), "KMS encrypt succeeded");
        Ok(BASE64.encode(blob.as_ref()))
    }

    async fn decrypt(
        &self,
        ciphertext: &str,
        context: &EncryptionContext,
    ) -> Result<String, GatewayError> {
        let decoded = BASE64.decode(ciphertext).map_err(|e| {
            GatewayError::DecryptionFailed(format!("ciphertext is not valid base64: {e}"))
        })?;

        let mut req = self
            .client
            .decrypt()
            .key_id(&self.key_id)
            .ciphertext_blob(Blob::new(decoded));
        for (k, v) in context {
            req = req.encryption_context(k, v);
        }

        // Context mismatch and tampering surface here as a KMS error; it is
        // re-raised as-is rather than introspected.
        let output = req.send().await.map_err(|e| {
            warn!(context_keys = context.len(), "KMS decrypt call failed");
            GatewayError::DecryptionFailed(DisplayErrorContext(e).to_string())
        })?;

        let blob = output
            .plaintext()
            .ok_or_else(|| GatewayError::DecryptionFailed("KMS returned no plaintext".into()))?;

        let plaintext = String::from_utf8(blob.as_ref().to_vec()).map_err(|_| {
            GatewayError::DecryptionFailed("decrypted payload is not valid UTF-8".into())
        })?;

        debug!(context_keys = context.len(), "KMS decrypt succeeded");
        Ok(plaintext)
    }
}
