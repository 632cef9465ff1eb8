use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use searchsync_infra::DispatchError;

pub fn dispatch_error_to_response(err: DispatchError) -> axum::response::Response {
    match &err {
        DispatchError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        DispatchError::UnsupportedOperation { .. } => {
            json_error(StatusCode::BAD_REQUEST, "unsupported_operation", err.to_string())
        }
        DispatchError::Store(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
