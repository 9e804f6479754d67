//! OceanView concierge HTTP server
//!
//! Axum-based server for the hotel site: serves the WASM frontend and
//! proxies chat turns to the completion provider so the API key never
//! reaches the browser.

mod config;
mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use concierge_core::ConciergeBuilder;
use concierge_runtime::build_provider;

use crate::config::ServerConfig;
use crate::handlers::{chat_handler, health_check, list_models, list_rooms};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    // Initialize completion provider
    let provider = build_provider(config.provider);
    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to {}", provider.name()),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not available - chat will answer with the fallback", provider.name());
            tracing::warn!("  Set GEMINI_API_KEY in .env, or CONCIERGE_PROVIDER=ollama|mock");
        }
    }

    let mut builder = ConciergeBuilder::new().provider(provider);
    if let Some(model) = &config.model {
        builder = builder.model(model);
    }
    let concierge = builder.build()?;
    tracing::info!("Model: {}", concierge.model());

    let app = build_router(AppState::new(concierge), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🌊 OceanView concierge running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /api/models  - List provider models");
    tracing::info!("  GET  /api/rooms   - Room catalog");
    tracing::info!("  POST /api/chat    - Send a chat turn");
    tracing::info!("  GET  /*           - Static site from {}", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/models", get(list_models))
        .route("/api/rooms", get(list_rooms))
        // Assistant API
        .route("/api/chat", post(chat_handler))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use concierge_core::{Concierge, hotel::FALLBACK_REPLY, provider::MockProvider};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn app(provider: Arc<MockProvider>) -> Router {
        build_router(
            AppState::new(Concierge::with_defaults(provider)),
            "does-not-exist",
        )
    }

    async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_chat_reply() {
        let provider = Arc::new(MockProvider::new());
        provider.push_reply("Check-in is from 2:00 PM.");

        let (status, body) = post_chat(
            app(provider.clone()),
            json!({
                "history": [{"role": "assistant", "text": "Ayubowan!"}],
                "message": "What time is check-in?"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Check-in is from 2:00 PM.");
        assert_eq!(body["fallback"], false);

        // system + greeting + new input
        let sent = &provider.requests()[0];
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[2].text, "What time is check-in?");
    }

    #[tokio::test]
    async fn test_chat_fallback_on_provider_failure() {
        let provider = Arc::new(MockProvider::failing());

        let (status, body) = post_chat(app(provider), json!({"message": "Hello?"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], true);
        assert_eq!(body["message"], FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let provider = Arc::new(MockProvider::new());

        let (status, body) = post_chat(app(provider.clone()), json!({"message": "   "})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "EMPTY_MESSAGE");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rooms() {
        let (status, body) = get_json(app(Arc::new(MockProvider::new())), "/api/rooms").await;

        assert_eq!(status, StatusCode::OK);
        let prices: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["price"].as_str().unwrap())
            .collect();
        assert_eq!(prices, vec!["80", "120", "180"]);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(Arc::new(MockProvider::new())), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["provider"], "Mock");
        assert_eq!(body["provider_connected"], true);
    }

    #[tokio::test]
    async fn test_models() {
        let (status, body) = get_json(app(Arc::new(MockProvider::new())), "/api/models").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "mock-receptionist");
    }
}
