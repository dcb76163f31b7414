//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Inject shared application state (`AppState`) into handlers.
//! - Convert every outcome — success, typed error, or panic — into the
//!   uniform response envelope; nothing escapes to the transport uncaught.

pub mod handlers;
pub mod middleware;
pub mod respond;
pub mod router;
pub mod state;
