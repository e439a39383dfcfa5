// HTTP routes configuration

use super::handlers::{health_handler, metrics_handler, translate_handler};
use super::middleware::{cors_layer, request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gateway: Gateway,
}

pub fn create_router(config: AppConfig, gateway: Gateway) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;
    let max_body_bytes = config.server.max_body_bytes;

    let state = AppState {
        config: Arc::new(config),
        gateway,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/translate", post(translate_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
