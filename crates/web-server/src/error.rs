use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analysis error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("Malformed request: {0}")]
    BadRequest(String),
    #[error("Request did not complete within {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// Converts our custom `AppError` into the `{ success: false, error }` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Engine(engine_err) => {
                tracing::error!(error = ?engine_err, "Strategic analysis failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing FODA analysis".to_string(),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Timeout(limit) => {
                let message = AppError::Timeout(limit).to_string();
                tracing::warn!(limit_ms = limit.as_millis() as u64, "Request timed out.");
                (StatusCode::REQUEST_TIMEOUT, message)
            }
        };

        let body = Json(json!({ "success": false, "error": error_message }));
        (status, body).into_response()
    }
}
