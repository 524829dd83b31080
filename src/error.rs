//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for relayed requests.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Upstream answered with a non-success status; code and body are
    /// forwarded to the caller untouched.
    #[error("upstream returned HTTP {status}: {body}")]
    RemoteStatus {
        /// Upstream status code
        status: u16,
        /// Upstream response body, verbatim
        body: String,
    },

    /// Upstream could not be reached before a response was received.
    #[error("upstream unavailable: {0}")]
    RemoteUnavailable(String),

    /// Any other unexpected failure.
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            // The upstream body passes through verbatim, no envelope.
            ProxyError::RemoteStatus { status, body } => {
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, body).into_response()
            }
            ProxyError::RemoteUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorResponse::new(msg))).into_response()
            }
            ProxyError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(msg))).into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_display() {
        let err = ProxyError::RemoteStatus {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned HTTP 404: not found");
    }

    #[test]
    fn test_remote_status_response_keeps_code() {
        let err = ProxyError::RemoteStatus {
            status: 404,
            body: "not found".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_remote_status_bad_code_falls_back_to_500() {
        let err = ProxyError::RemoteStatus {
            status: 42,
            body: String::new(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_remote_unavailable_maps_to_503() {
        let err = ProxyError::RemoteUnavailable("connection refused".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = ProxyError::Internal("boom".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
