//! Response DTOs for the proxy API
//!
//! Most endpoints forward upstream payloads untouched; only the health
//! check and the error envelope have a shape of their own.

use serde::Serialize;

/// Fixed response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: &'static str,
}

impl HealthResponse {
    /// Creates the canonical health payload.
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Error response body for the 503/500 error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::ok();
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("connection refused");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("connection refused"));
    }
}
