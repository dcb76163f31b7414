//! Axum middleware layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, response compression, and
//! panic capture.

use std::any::Any;
use std::time::Duration;

use axum::response::Response;
use common::ServiceError;
use tracing::error;

use super::respond;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Convert a handler panic into the uniform 500 envelope.
///
/// The panic payload is logged but never sent to the caller — the response
/// carries only the generic `"Unknown error"` marker.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    error!(panic = %detail, "request handler panicked");

    respond::failure(ServiceError::Internal("Unknown error".into()))
}
