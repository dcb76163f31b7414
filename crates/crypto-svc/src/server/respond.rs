//! Uniform response envelope construction.
//!
//! Every handler outcome passes through here: successes become a 200 with the
//! JSON payload, errors become their taxonomy status with a `{message, error?}`
//! body. Neither function can fail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{protocol::ErrorResponse, ServiceError};
use serde::Serialize;

/// Build a 200 response from a JSON-serialisable payload.
pub fn success<T: Serialize>(payload: &T) -> Response {
    (StatusCode::OK, Json(payload)).into_response()
}

/// Build an error response from a [`ServiceError`].
///
/// Gateway failures carry a generic message plus the collaborator's error
/// text; validation failures carry only their field-specific message.
pub fn failure(err: ServiceError) -> Response {
    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        ServiceError::BadRequest(message) => ErrorResponse::new(message),
        ServiceError::EncryptionFailure(cause) => {
            ErrorResponse::with_cause("Error encrypting data", cause)
        }
        ServiceError::DecryptionFailure(cause) => {
            ErrorResponse::with_cause("Error decrypting data", cause)
        }
        ServiceError::Internal(cause) => ErrorResponse::with_cause("Internal server error", cause),
    };
    (status, Json(body)).into_response()
}
