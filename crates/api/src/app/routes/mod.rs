use axum::{Router, routing::post};

pub mod ingest;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new().route("/ingest", post(ingest::ingest))
}
