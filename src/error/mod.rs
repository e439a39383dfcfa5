// Error types for the translation gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Failures reported by a translation provider.
///
/// Every variant is a provider-side condition; client-input problems never
/// reach the provider and are represented by [`GatewayError::InvalidRequest`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Unsupported {field} language: {code}")]
    UnsupportedLanguage { field: &'static str, code: String },

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider call timed out after {0}s")]
    Timeout(u64),

    #[error("Provider returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Provider transport error: {0}")]
    Transport(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Stable identifier used in error bodies and metric labels.
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::UnsupportedLanguage { .. } => "unsupported_language",
            ProviderError::RateLimited(_) => "rate_limit_error",
            ProviderError::Unavailable(_) => "provider_unavailable",
            ProviderError::Timeout(_) => "timeout_error",
            ProviderError::Upstream { .. }
            | ProviderError::Transport(_)
            | ProviderError::InvalidResponse(_) => "provider_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProviderError::RateLimited(_) | ProviderError::Unavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ProviderError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Body is not valid JSON at all.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Body is JSON but does not match the request schema.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Classify a body deserialization failure as syntax (400) or schema (422).
    pub fn from_body_error(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            GatewayError::MalformedBody(err.to_string())
        } else {
            GatewayError::InvalidRequest(err.to_string())
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Provider(e) => e.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::MalformedBody(_)
            | GatewayError::InvalidRequest(_)
            | GatewayError::PayloadTooLarge(_) => "invalid_request_error",
            GatewayError::Provider(e) => e.error_type(),
            GatewayError::Config(_) | GatewayError::ConfigParsing(_) => "configuration_error",
            _ => "api_error",
        }
    }
}

// Convert GatewayError to HTTP responses for Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "type": "error",
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
