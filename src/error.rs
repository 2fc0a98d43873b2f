//! Unified error types for the info service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Errors raised while bringing the service up.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bind address could not be parsed.
    #[error("invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// The fixed two-field JSON shape returned on any non-2xx outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short category label.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Request-path fault taxonomy.
///
/// Every fault is converted to an [`ErrorEnvelope`] at the routing boundary;
/// nothing propagates to the transport layer as a raw fault.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path not registered with the router.
    #[error("endpoint does not exist")]
    NotFound,

    /// Known path, method not registered for it.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Anything escaping route logic. Detail is logged server-side only.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match &self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorEnvelope::new("Not Found", "Endpoint does not exist"),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorEnvelope::new("HTTP Error", "Method Not Allowed"),
            ),
            ApiError::Internal(source) => {
                error!("unhandled error while serving request: {source:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::new("Internal Server Error", "An unexpected error occurred"),
                )
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            warn!("http error {status}: {self}");
        }

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_envelope() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn internal_error_hides_detail() {
        let response = ApiError::Internal(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_serializes_both_fields() {
        let envelope = ErrorEnvelope::new("Not Found", "Endpoint does not exist");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "Endpoint does not exist");
    }
}
