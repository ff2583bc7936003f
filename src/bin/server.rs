//! Mars rover HTTP server binary.
//!
//! # Environment Variables
//!
//! - `HOST` — Bind address (default: 0.0.0.0)
//! - `PORT` — HTTP port (default: 3000)
//! - `ROVER_STRICT_INSTRUCTIONS` — Reject unknown instruction characters (default: false)
//! - `ROVER_MAX_BODY_BYTES` — Request body limit (default: 65536)
//! - `RUST_LOG` — Tracing filter (default: "info,mars_rover=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! curl -X POST localhost:3000/rovers/positions \
//!   -H 'Content-Type: application/json' \
//!   -d '{"input": "5 5\n1 2 N\nLMLMLMLMM"}'
//! ```

use anyhow::Context;
use mars_rover::server::{app_router, AppState};
use mars_rover::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mars_rover=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to read configuration")?;
    let bind_addr = config.bind_addr();
    tracing::debug!(?config, "loaded configuration");

    let app = app_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("mars-rover server listening on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                 — service info");
    tracing::info!("  GET  /health           — liveness probe");
    tracing::info!("  POST /rovers/positions — simulate rovers");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
