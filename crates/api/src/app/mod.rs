//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: engine wiring (entity store + dispatcher)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use searchsync_infra::EngineConfig;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: EngineConfig) -> Router {
    build_app_with(Arc::new(services::AppServices::in_memory(config)))
}

/// Build the router around existing services (tests inspect the store through them).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
