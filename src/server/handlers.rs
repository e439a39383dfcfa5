// HTTP request handlers

use super::routes::AppState;
use crate::error::{GatewayError, Result};
use crate::models::{TranslationRequest, TranslationResult};
use crate::utils::logging::truncate_for_log;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// `status` is always `healthy` while the process is serving.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let provider = state.gateway.provider();
    checks.insert(
        "provider".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{} at {}", provider.name(), provider.endpoint()),
        },
    );

    checks.insert(
        "cors".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Allowed origin: {}", state.config.cors.allowed_origin),
        },
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>, // Raw bytes so every rejection gets our error envelope
) -> Result<Json<TranslationResult>> {
    let body = body.map_err(|rejection| {
        debug!("Failed to read translate body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GatewayError::PayloadTooLarge(rejection.body_text())
        } else {
            GatewayError::MalformedBody(rejection.body_text())
        }
    })?;

    debug!(
        "Raw request JSON: {}",
        truncate_for_log(&String::from_utf8_lossy(&body), 500)
    );

    // Invalid UTF-8 surfaces here as a syntax error
    let req: TranslationRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected translate request: {}", e);
        GatewayError::from_body_error(e)
    })?;

    info!(
        "Received translate request: source={}, target={}, chars={}",
        req.source,
        req.target,
        req.text.chars().count()
    );

    let result = state.gateway.translate(&req).await?;
    Ok(Json(result))
}

/// Prometheus text exposition
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
