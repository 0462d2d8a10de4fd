//! Error types for the key/value gateway
//!
//! Every variant is a per-request rejection; none of them is fatal to the server.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Gateway Error Enum ==
/// Rejections produced while serving a request.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Insert attempted against a full store
    #[error("Store is full")]
    CapacityExceeded,

    /// Fetch or remove of a key that is not stored
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Body or query string could not be parsed
    #[error("Invalid request: {0}")]
    MalformedRequest(String),

    /// Route called with the wrong request method
    #[error("Invalid request method: {0}")]
    MethodNotAllowed(Method),
}

impl GatewayError {
    /// HTTP status used to report this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::CapacityExceeded => StatusCode::CONFLICT,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for gateway handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::CapacityExceeded.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            GatewayError::NotFound("k".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::MalformedRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::MethodNotAllowed(Method::PUT).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GatewayError::CapacityExceeded.to_string(), "Store is full");
        assert_eq!(
            GatewayError::NotFound("user:1".into()).to_string(),
            "Key not found: user:1"
        );
        assert_eq!(
            GatewayError::MethodNotAllowed(Method::GET).to_string(),
            "Invalid request method: GET"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = GatewayError::CapacityExceeded.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
