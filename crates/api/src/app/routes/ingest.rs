use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use searchsync_events::IngestionRequest;

use crate::app::errors;
use crate::app::services::AppServices;

/// `POST /api/ingest`: one event in, the derived index operations out.
pub async fn ingest(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<IngestionRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!("unreadable ingestion body: {rejection}");
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text());
        }
    };

    // The engine is synchronous and waits on the store lock.
    let outcome = tokio::task::spawn_blocking(move || services.ingest(&request)).await;

    match outcome {
        Ok(Ok(operations)) => (StatusCode::OK, Json(operations)).into_response(),
        Ok(Err(e)) => errors::dispatch_error_to_response(e),
        Err(join_err) => {
            tracing::error!("ingestion task failed: {join_err}");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "ingestion task failed",
            )
        }
    }
}
