//! Axum request handlers for all service endpoints.
//!
//! Each handler runs the same pipeline: validate the raw body, resolve the
//! encryption context, call the crypto gateway, and shape the response.
//! Exactly one response is produced per request regardless of path taken, and
//! no cryptographic call is ever attempted for an invalid request.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use common::protocol::{DecryptResponse, EncryptResponse, ErrorResponse, HealthResponse};
use common::ServiceError;
use tracing::warn;

use crate::context;
use crate::validate;

use super::respond;
use super::state::AppState;

/// `POST /encrypt` — encrypt a text payload under the configured KMS key.
///
/// Accepts `{"data": string, "context"?: map}` (alias: `plaintext`). Returns
/// the base64 ciphertext and the encryption context that was bound into it.
pub async fn encrypt(State(state): State<AppState>, body: Bytes) -> Response {
    let input = match validate::encrypt_request(&body) {
        Ok(input) => input,
        Err(e) => return respond::failure(ServiceError::BadRequest(e.to_string())),
    };

    let encryption_context = context::resolve(input.context);

    match state
        .gateway
        .encrypt(input.data.as_bytes(), &encryption_context)
        .await
    {
        Ok(encrypted_data) => respond::success(&EncryptResponse {
            message: "Data encrypted successfully".into(),
            encrypted_data,
            encryption_context,
        }),
        Err(e) => {
            warn!(error = %e, "encrypt request failed");
            respond::failure(e.into())
        }
    }
}

/// `POST /decrypt` — decrypt a base64 ciphertext under the configured KMS key.
///
/// Accepts `{"ciphertext": string, "context"?: map}` (alias: `encryptedData`).
/// The resolved context is forwarded as-is; the key-management service is the
/// sole arbiter of whether it matches the one bound at encrypt time.
pub async fn decrypt(State(state): State<AppState>, body: Bytes) -> Response {
    let input = match validate::decrypt_request(&body) {
        Ok(input) => input,
        Err(e) => return respond::failure(ServiceError::BadRequest(e.to_string())),
    };

    let encryption_context = context::resolve(input.context);

    match state
        .gateway
        .decrypt(&input.ciphertext, &encryption_context)
        .await
    {
        Ok(decrypted_data) => respond::success(&DecryptResponse {
            message: "Data decrypted successfully".into(),
            decrypted_data,
            encryption_context,
        }),
        Err(e) => {
            warn!(error = %e, "decrypt request failed");
            respond::failure(e.into())
        }
    }
}

/// `GET /health` — liveness check.
///
/// Configuration is validated before the server starts, so a serving process
/// is always ready.
pub async fn health() -> Response {
    respond::success(&HealthResponse {
        status: "ok".into(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("the requested resource does not exist");
    (axum::http::StatusCode::NOT_FOUND, axum::Json(err))
}
