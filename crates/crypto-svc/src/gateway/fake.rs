//! Deterministic in-process test double for [`CryptoGateway`].
//!
//! Encrypts with AES-256-GCM-SIV under a fixed key and nonce, binding a
//! canonical rendering of the encryption context as additional authenticated
//! data. This reproduces the collaborator's observable contract — round trips
//! succeed, a different context (or tampered ciphertext) fails decryption —
//! without any network access.

use std::collections::BTreeMap;

use aes_gcm_siv::{
    aead::{Aead, KeyInit, Payload},
    Aes256GcmSiv, Nonce,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use common::EncryptionContext;

use super::{CryptoGateway, GatewayError};

const NONCE_LEN: usize = 12;

pub struct FakeGateway {
    cipher: Aes256GcmSiv,
}

impl FakeGateway {
    pub fn new() -> Self {
        let key = [0x42u8; 32];
        Self {
            cipher: Aes256GcmSiv::new(&key.into()),
        }
    }
}

/// Key-order-independent byte rendering of the context, used as AAD.
fn canonical_aad(context: &EncryptionContext) -> Vec<u8> {
    let sorted: BTreeMap<&str, &str> = context
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    serde_json::to_vec(&sorted).expect("context serialisation cannot fail")
}

#[async_trait]
impl CryptoGateway for FakeGateway {
    async fn encrypt(
        &self,
        plaintext: &[u8],
        context: &EncryptionContext,
    ) -> Result<String, GatewayError> {
        let aad = canonical_aad(context);
        let nonce = Nonce::from_slice(&[0u8; NONCE_LEN]);
        let ciphertext = self
            .cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext,
                    aad: &aad,
                },
            )
            .map_err(|_| GatewayError::EncryptionFailed("aead failure".into()))?;
        Ok(BASE64.encode(ciphertext))
    }

    async fn decrypt(
        &self,
        ciphertext: &str,
        context: &EncryptionContext,
    ) -> Result<String, GatewayError> {
        let decoded = BASE64.decode(ciphertext).map_err(|e| {
            GatewayError::DecryptionFailed(format!("ciphertext is not valid base64: {e}"))
        })?;
        let aad = canonical_aad(context);
        let nonce = Nonce::from_slice(&[0u8; NONCE_LEN]);
        let plaintext = self
            .cipher
            .decrypt(
                nonce,
                Payload {
                    msg: &decoded,
                    aad: &aad,
                },
            )
            .map_err(|_| {
                GatewayError::DecryptionFailed(
                    "encryption context mismatch or ciphertext tampered".into(),
                )
            })?;
        String::from_utf8(plaintext).map_err(|_| {
            GatewayError::DecryptionFailed("decrypted payload is not valid UTF-8".into())
        })
    }
}
