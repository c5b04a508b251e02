// src/routes/mod.rs
pub mod chat;
pub mod health;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{auto_handler, chat_handler, culture_handler, explain_handler, grammar_handler, story_handler};
use health::{health_handler, root_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/story", post(story_handler))
        .route("/culture", post(culture_handler))
        .route("/grammar", post(grammar_handler))
        .route("/explain", post(explain_handler))
        .route("/auto", post(auto_handler))
        .layer(TraceLayer::new_for_http())
}
