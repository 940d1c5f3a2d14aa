use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DiscoveryError;
use serde_json::json;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("request rejected: {}", self);
        let status = match &self {
            ApiError::Discovery(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
