//! HTTP server exposing the rover simulation.
//!
//! # Endpoints
//!
//! - `GET  /`                 — Service info
//! - `GET  /health`           — Liveness probe
//! - `POST /rovers/positions` — Simulate rovers from a text block (JSON or form)

pub mod error;
pub mod extract;
pub mod routes;

pub use error::ApiError;
pub use extract::{PositionsPayload, PositionsRequest};
pub use routes::{app_router, AppState};
