//! `crypto-svc` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables; a missing
//!    `KMS_KEY_ID` is fatal here, before any request is served.
//! 2. Initialise the tracing subscriber.
//! 3. Initialise the AWS KMS client and construct the [`KmsGateway`].
//! 4. Build the Axum router and start the HTTP server.

mod aws;
mod config;
mod context;
mod gateway;
mod server;
mod telemetry;
mod validate;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use config::Config;
use gateway::KmsGateway;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        http_port = cfg.http_port,
        "crypto-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. KMS gateway
    // -----------------------------------------------------------------------
    let kms = aws::kms_client(cfg.kms_endpoint_url.as_deref()).await;
    let gateway = Arc::new(KmsGateway::new(kms, cfg.kms_key_id.clone()));

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(gateway);
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.http_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
