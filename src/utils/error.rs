//! Error handling for the Carzo backend
//!
//! This module defines all error types used throughout the service.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the Carzo backend
pub type Result<T> = std::result::Result<T, CarzoError>;

/// Main error type for the Carzo backend
///
/// Rate-limit denials are not errors; routes build their 429 responses
/// directly so the limit/remaining/reset headers travel with them.
#[derive(Error, Debug)]
pub enum CarzoError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound HTTP client errors (counter-store RPC)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Counter-store errors (malformed or empty RPC payloads)
    #[error("Counter store error: {0}")]
    CounterStore(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl CarzoError {
    /// Create a server startup error
    pub fn server<S: Into<String>>(message: S) -> Self {
        CarzoError::Internal(message.into())
    }

    /// Stable machine-readable code for API error envelopes
    fn error_code(&self) -> &'static str {
        match self {
            CarzoError::Config(_) => "CONFIG_ERROR",
            CarzoError::Validation(_) => "INVALID_REQUEST",
            CarzoError::HttpClient(_) | CarzoError::CounterStore(_) => "UPSTREAM_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Message exposed to API clients; infrastructure details are masked
    fn public_message(&self) -> String {
        match self {
            CarzoError::HttpClient(_) | CarzoError::CounterStore(_) => {
                "Upstream service call failed".to_string()
            }
            CarzoError::Internal(_)
            | CarzoError::Serialization(_)
            | CarzoError::Yaml(_)
            | CarzoError::Io(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for CarzoError {
    fn status_code(&self) -> StatusCode {
        match self {
            CarzoError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
            }
        }))
    }
}
