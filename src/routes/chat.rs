use axum::{
    Json,
    extract::State,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    extract::ApiJson,
    message::{ChatRequest, ChatResponse, now_timestamp},
    services::{
        chatbot::{detect_request_type, generate_reply},
        prompt_router::has_template,
    },
    state::SharedState,
};

const LOG_PREVIEW_CHARS: usize = 50;

pub async fn chat_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let model = state.model()?;
    let request_id = Uuid::new_v4();
    let kind = payload.kind.as_str();
    let preview: String = payload.message.chars().take(LOG_PREVIEW_CHARS).collect();
    tracing::info!(%request_id, %kind, "processing chat request: {preview}...");
    if !has_template(kind) {
        tracing::debug!(%request_id, %kind, "no template for type, using base prompt");
    }

    let response = generate_reply(model, &payload.message, kind)
        .await
        .inspect_err(|e| tracing::warn!(%request_id, error = %e, "model call failed"))?;

    tracing::info!(%request_id, chars = response.chars().count(), "generated response");

    Ok(Json(ChatResponse {
        response,
        audio_url: None,
        timestamp: now_timestamp(),
    }))
}

async fn with_kind(
    state: SharedState,
    mut payload: ChatRequest,
    kind: &str,
) -> Result<Json<ChatResponse>, AppError> {
    payload.kind = kind.to_string();
    chat_handler(State(state), ApiJson(payload)).await
}

pub async fn story_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    with_kind(state, payload, "story").await
}

pub async fn culture_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    with_kind(state, payload, "culture").await
}

pub async fn grammar_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    with_kind(state, payload, "grammar").await
}

pub async fn explain_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    with_kind(state, payload, "explain").await
}

// Picks the template from the message's keywords; `/chat` never does this.
pub async fn auto_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let detected = detect_request_type(&payload.message);
    with_kind(state, payload, detected.as_str()).await
}
