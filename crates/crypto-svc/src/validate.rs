//! Request body validation.
//!
//! Handlers receive the raw body bytes so that "no body", "not JSON", and
//! "missing field" stay distinguishable — each maps to its own 400 message.
//! Field aliases from the legacy endpoint variants are normalised here:
//! encrypt accepts `data` or `plaintext`, decrypt accepts `ciphertext` or
//! `encryptedData`, and a caller-supplied context may arrive as `context` or
//! `encryptionContext`.

use common::EncryptionContext;
use serde::Deserialize;
use thiserror::Error;

/// Client input errors. All map to HTTP 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request carried no body at all.
    #[error("No data provided")]
    MissingBody,

    /// The body could not be parsed as JSON.
    #[error("Request body is not valid JSON")]
    MalformedJson,

    /// A required field is absent, null, or an empty string.
    #[error("{0} field is required")]
    MissingField(&'static str),
}

/// A validated encrypt request: the plaintext plus any caller-supplied context.
#[derive(Debug)]
pub struct EncryptInput {
    pub data: String,
    pub context: Option<EncryptionContext>,
}

/// A validated decrypt request: the base64 ciphertext plus any caller-supplied context.
#[derive(Debug)]
pub struct DecryptInput {
    pub ciphertext: String,
    pub context: Option<EncryptionContext>,
}

#[derive(Deserialize)]
struct RawEncryptBody {
    #[serde(alias = "plaintext")]
    data: Option<String>,
    #[serde(alias = "encryptionContext")]
    context: Option<EncryptionContext>,
}

#[derive(Deserialize)]
struct RawDecryptBody {
    #[serde(alias = "encryptedData")]
    ciphertext: Option<String>,
    #[serde(alias = "encryptionContext")]
    context: Option<EncryptionContext>,
}

/// Validate an encrypt request body.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the body is empty, is not JSON, or the
/// `data` field is absent, null, or empty.
pub fn encrypt_request(body: &[u8]) -> Result<EncryptInput, ValidationError> {
    let raw: RawEncryptBody = parse(body)?;
    let data = require_non_empty(raw.data, "data")?;
    Ok(EncryptInput {
        data,
        context: raw.context,
    })
}

/// Validate a decrypt request body.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the body is empty, is not JSON, or the
/// `ciphertext` field is absent, null, or empty.
pub fn decrypt_request(body: &[u8]) -> Result<DecryptInput, ValidationError> {
    let raw: RawDecryptBody = parse(body)?;
    let ciphertext = require_non_empty(raw.ciphertext, "ciphertext")?;
    Ok(DecryptInput {
        ciphertext,
        context: raw.context,
    })
}

fn parse<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::MissingBody);
    }
    serde_json::from_slice(body).map_err(|_| ValidationError::MalformedJson)
}

fn require_non_empty(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_missing_body() {
        let err = encrypt_request(b"").unwrap_err();
        assert_eq!(err, ValidationError::MissingBody);
        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn garbage_body_is_malformed_json() {
        let err = encrypt_request(b"not json{").unwrap_err();
        assert_eq!(err, ValidationError::MalformedJson);
    }

    #[test]
    fn absent_data_field_is_missing_field() {
        let err = encrypt_request(br#"{"other": "x"}"#).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("data"));
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn null_data_field_is_missing_field() {
        let err = encrypt_request(br#"{"data": null}"#).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("data"));
    }

    #[test]
    fn empty_data_field_is_missing_field() {
        let err = encrypt_request(br#"{"data": ""}"#).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("data"));
    }

    #[test]
    fn plaintext_alias_accepted_for_encrypt() {
        let input = encrypt_request(br#"{"plaintext": "hello"}"#).unwrap();
        assert_eq!(input.data, "hello");
        assert!(input.context.is_none());
    }

    #[test]
    fn encrypt_captures_supplied_context() {
        let input =
            encrypt_request(br#"{"data": "hi", "context": {"tenant": "acme"}}"#).unwrap();
        let ctx = input.context.unwrap();
        assert_eq!(ctx.get("tenant").map(String::as_str), Some("acme"));
    }

    #[test]
    fn encryption_context_alias_accepted() {
        let input =
            encrypt_request(br#"{"data": "hi", "encryptionContext": {"a": "b"}}"#).unwrap();
        assert!(input.context.is_some());
    }

    #[test]
    fn absent_ciphertext_field_is_missing_field() {
        let err = decrypt_request(br#"{"data": "x"}"#).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("ciphertext"));
        assert!(err.to_string().contains("ciphertext"));
    }

    #[test]
    fn encrypted_data_alias_accepted_for_decrypt() {
        let input = decrypt_request(br#"{"encryptedData": "AQID"}"#).unwrap();
        assert_eq!(input.ciphertext, "AQID");
    }

    #[test]
    fn ciphertext_field_accepted_for_decrypt() {
        let input = decrypt_request(br#"{"ciphertext": "AQID"}"#).unwrap();
        assert_eq!(input.ciphertext, "AQID");
    }
}
