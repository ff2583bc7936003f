//! Axum route handlers for the rover HTTP server.
//!
//! # Routes
//!
//! - `GET  /`                 — Service info and endpoint map
//! - `GET  /health`           — Returns `{"status": "OK", "timestamp": "..."}`
//! - `POST /rovers/positions` — Accepts `{"input": "<text>"}` or the form
//!   `input=<text>`, returns the final rover positions as one
//!   newline-joined JSON string
//! - anything else            — 404 `{"error": "Route not found"}`

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::error::ApiError;
use super::extract::PositionsPayload;
use crate::config::ServerConfig;
use crate::rover::get_rovers_position_with;

/// Shared application state for the HTTP server.
///
/// Read-only; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .route("/rovers/positions", post(positions_handler))
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// GET / — service description.
async fn info_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Mars Rover simulation API",
        "version": crate::VERSION,
        "endpoints": {
            "health": "/health",
            "rovers-positions": "/rovers/positions",
        },
    }))
}

/// POST /rovers/positions — simulate every rover in the input text.
///
/// Request:  `{ "input": "5 5\n1 2 N\nLMLMLMLMM" }`
/// Response: `"1 3 N"` (one line per rover, joined with `\n`)
async fn positions_handler(
    State(state): State<AppState>,
    PositionsPayload(request): PositionsPayload,
) -> Result<Json<String>, ApiError> {
    let input = request
        .input
        .filter(|text| !text.trim().is_empty())
        .ok_or(ApiError::MissingInput)?;

    let results =
        get_rovers_position_with(&input, state.config.instruction_policy).map_err(|err| {
            tracing::warn!("invalid rover input");
            tracing::debug!(reason = err.reason(), "rover input rejected");
            ApiError::from(err)
        })?;

    if results.is_empty() {
        return Err(ApiError::NoRovers);
    }

    tracing::info!(rovers = results.len(), "simulated rover positions");
    Ok(Json(results.join("\n")))
}

/// Catch-all for unmatched routes.
async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
