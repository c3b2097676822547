//! API error taxonomy and rendering
//!
//! Handlers never recover from request errors locally; they return an
//! [`ApiError`] and the rendering here turns it into the wire shape
//! `{ "message": ..., "error": ... }`. Development mode includes the raw
//! error object, production replaces it with `{}`.

use crate::config::Environment;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Error signaled by a request handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource or route does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request is missing a required field
    #[error("{0}")]
    BadRequest(String),

    /// Anything without a more specific status
    #[error("{0}")]
    Internal(String),
}

/// JSON body sent for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: Value,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }

    /// Renders the response body for the given environment mode.
    ///
    /// Clients always get a `message`; the `error` object carries the raw
    /// error only in development.
    pub fn render(&self, environment: Environment) -> ErrorBody {
        let error = match environment {
            Environment::Development => json!({
                "kind": self.kind(),
                "status": self.status().as_u16(),
            }),
            Environment::Production => json!({}),
        };

        ErrorBody {
            message: self.to_string(),
            error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.render(Environment::active());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::not_found("Cart not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::bad_request("Cart ID required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn development_rendering_includes_raw_error() {
        let body = ApiError::not_found("Cart not found").render(Environment::Development);

        assert_eq!(body.message, "Cart not found");
        assert_eq!(body.error["kind"], "not_found");
        assert_eq!(body.error["status"], 404);
    }

    #[test]
    fn production_rendering_suppresses_detail() {
        let body = ApiError::bad_request("Cart ID required").render(Environment::Production);

        assert_eq!(body.message, "Cart ID required");
        assert_eq!(body.error, json!({}));
    }
}
