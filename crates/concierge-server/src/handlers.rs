//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use concierge_core::{Message, Room, catalog, provider::ModelInfo};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
    pub provider_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// New guest input
    pub message: String,
    /// Transcript before `message`
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Text to append to the transcript
    pub message: String,
    /// `message` is the fixed apology, not a model reply
    pub fallback: bool,
    pub model: String,
    pub request_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.concierge.provider();
    let provider_connected = provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        provider: provider.name().to_string(),
        provider_connected,
    })
}

/// Models offered by the configured provider; empty when unreachable
pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelInfo>> {
    let models = state
        .concierge
        .provider()
        .list_models()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Model listing failed: {}", e);
            Vec::new()
        });
    Json(models)
}

/// Room catalog
pub async fn list_rooms() -> Json<&'static [Room]> {
    Json(catalog::rooms())
}

/// One chat turn: history + new message in, reply (or fallback) out
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Message must not be empty".into(),
                code: "EMPTY_MESSAGE".into(),
            }),
        ));
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let concierge = &state.concierge;

    tracing::info!(
        %request_id,
        history = payload.history.len(),
        "Chat turn"
    );

    let reply = concierge.reply(&payload.history, &payload.message).await;
    let fallback = reply.is_fallback();
    if fallback {
        tracing::warn!(%request_id, "Serving fallback reply");
    }

    Ok(Json(ChatResponse {
        message: reply.text().unwrap_or_default().to_string(),
        fallback,
        model: concierge.model().to_string(),
        request_id,
    }))
}
