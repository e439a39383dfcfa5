//! Axum-based HTTP server for the translation gateway.
//!
//! # Components
//!
//! - `handlers`: `/translate`, `/health` and `/metrics` endpoints.
//! - `middleware`: CORS policy, request IDs and request metrics.
//! - `routes`: The router that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthCheck, HealthResponse};
pub use routes::{create_router, AppState};
