//! HTTP error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::rover::RoverError;

/// Errors returned by the route handlers.
///
/// Each variant renders as `{"error": "<message>"}` with its status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no `input` text.
    #[error("Input is required")]
    MissingInput,

    /// The body was not a JSON object of the expected shape.
    #[error("Invalid request body")]
    InvalidBody,

    /// The body exceeded the configured size limit.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The input parsed but held no rovers.
    #[error("No valid rover positions found")]
    NoRovers,

    /// The input text could not be parsed.
    #[error(transparent)]
    Rover(#[from] RoverError),

    /// No route matched.
    #[error("Route not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput
            | ApiError::InvalidBody
            | ApiError::NoRovers
            | ApiError::Rover(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
