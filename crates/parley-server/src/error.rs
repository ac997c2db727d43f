//! API error type mapping to HTTP status codes and JSON error bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    /// No resolvable account behind the request; the client should send the
    /// user to sign-in.
    #[error("authentication required")]
    Unauthenticated,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
    /// An unexpected failure whose cause is worth surfacing separately from
    /// the generic message.
    #[error("{message}")]
    Unexpected { message: String, details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({
                    "error": "authentication required",
                    "redirect": "/sign-in"
                }),
            ),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Unexpected { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message, "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_carries_redirect() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Transcript is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
