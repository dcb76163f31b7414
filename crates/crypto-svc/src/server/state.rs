//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::gateway::CryptoGateway;

/// Application state shared across all request handlers.
///
/// Holds the crypto gateway behind a trait object so the concrete
/// collaborator is swappable without touching handler or validation logic.
#[derive(Clone)]
pub struct AppState {
    /// Seam to the key-management collaborator.
    pub gateway: Arc<dyn CryptoGateway>,
}

impl AppState {
    /// Create a new [`AppState`] with the provided gateway.
    pub fn new(gateway: Arc<dyn CryptoGateway>) -> Self {
        Self { gateway }
    }
}
