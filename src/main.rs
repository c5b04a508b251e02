use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use vanakkam_backend::{
    config::Config,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let state = match GeminiClient::new(&config) {
        Ok(client) => {
            tracing::info!(model = %config.model_name, timeout = ?config.timeout, "Gemini client initialized");
            AppState::new(Arc::new(client))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize Gemini client");
            AppState::without_model()
        }
    };

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .with_state(Arc::new(state))
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 Tamil assistant backend running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
