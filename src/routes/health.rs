use axum::{Json, extract::State};

use crate::{
    message::{HealthResponse, now_timestamp},
    state::SharedState,
};

const PROBE_PROMPT: &str = "வணக்கம்";

/// Liveness only; never touches the model.
pub async fn root_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_timestamp(),
        message: Some("வணக்கம்! Tamil AI Assistant Backend is running".to_string()),
        ..Default::default()
    })
}

/// Readiness: makes one trial call to the model.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let probe = match state.model() {
        Ok(model) => model
            .generate(PROBE_PROMPT)
            .await
            .map(|_| model.model_name().to_string())
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    let response = match probe {
        Ok(model) => HealthResponse {
            status: "healthy".to_string(),
            timestamp: now_timestamp(),
            gemini_api: Some("connected".to_string()),
            model: Some(model),
            ..Default::default()
        },
        Err(error) => {
            tracing::error!(%error, "health check failed");
            HealthResponse {
                status: "unhealthy".to_string(),
                timestamp: now_timestamp(),
                error: Some(error),
                ..Default::default()
            }
        }
    };

    Json(response)
}
