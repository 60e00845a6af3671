use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::normalize;
use crate::session::SessionTracker;
use crate::types::{ChatRequest, ReplyEnvelope};
use crate::webhook::WebhookClient;

/// Shared state: the upstream client plus the single piece of mutable state
/// in the process, the current session identifier.
pub struct AppState {
    pub webhook: WebhookClient,
    pub session: SessionTracker,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            webhook: WebhookClient::new(config.webhook_url.clone()),
            session: SessionTracker::new(config.initial_session_id()),
        }
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(post_chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true, "now": now_iso() }))
}

/// One relay turn: validate the message, forward it with the current session
/// id, normalize whatever came back, and adopt a reassigned session id.
///
/// Exactly one upstream call per accepted message; concurrent submissions
/// are neither queued nor serialized.
async fn post_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ReplyEnvelope>, RelayError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(RelayError::Validation);
    }

    let session_id = state.session.current().await;
    info!(%session_id, "relaying message to webhook");
    debug!(message, "user message");

    let envelope = state.webhook.send(&session_id, message).await?;

    if !envelope.is_success() {
        // A non-2xx body is not assumed to match the success schema.
        warn!(status = envelope.status, "webhook returned an error status");
        return Err(RelayError::Upstream {
            status: envelope.status,
            detail: envelope.body,
        });
    }

    let reply = normalize::normalize(envelope.content_type.as_deref(), &envelope.body);
    state.session.maybe_adopt(reply.session_id.as_deref()).await;

    Ok(Json(ReplyEnvelope {
        text: reply.text,
        query: reply.query,
    }))
}
