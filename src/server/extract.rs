//! Request body extraction for `POST /rovers/positions`.
//!
//! The body is either JSON (`{"input": "..."}`) or an urlencoded form
//! (`input=...`), chosen by the `Content-Type` header.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, StatusCode},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Body of `POST /rovers/positions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionsRequest {
    /// Raw rover input text.
    #[serde(default)]
    pub input: Option<String>,
}

/// A [`PositionsRequest`] decoded from either a JSON or a form body.
#[derive(Debug, Clone)]
pub struct PositionsPayload(pub PositionsRequest);

#[async_trait]
impl<S> FromRequest<S> for PositionsPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(body) = Form::<PositionsRequest>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    tracing::warn!(reason = %rejection.body_text(), "rejected form body");
                    body_error(rejection.status())
                })?;
            return Ok(Self(body));
        }

        let Json(body) = Json::<PositionsRequest>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(reason = %rejection.body_text(), "rejected request body");
                match rejection {
                    JsonRejection::MissingJsonContentType(_) => ApiError::MissingInput,
                    r => body_error(r.status()),
                }
            })?;
        Ok(Self(body))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

fn body_error(status: StatusCode) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::InvalidBody
    }
}
