use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::webhook::WebhookError;

/// The three failure outcomes of one relay turn, surfaced as data. None of
/// them end the session; the view renders them and the user tries again.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Empty or missing user message, rejected before any network activity.
    #[error("message is required")]
    Validation,
    /// The webhook answered with a non-2xx status. Its body is carried along
    /// untouched as diagnostic detail, never normalized.
    #[error("webhook returned status {status}")]
    Upstream { status: u16, detail: String },
    /// The call never completed: DNS, refused connection, timeout.
    #[error("webhook unreachable: {0}")]
    Transport(String),
}

impl From<WebhookError> for RelayError {
    fn from(err: WebhookError) -> Self {
        RelayError::Transport(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "message is required" })),
            )
                .into_response(),
            RelayError::Upstream { status, detail } => {
                // Mirror the upstream status so the caller sees what the
                // webhook actually said.
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(json!({ "error": "webhook error", "detail": detail })),
                )
                    .into_response()
            }
            RelayError::Transport(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
