//! HTTP Gateway
//!
//! Serves the demo's mock API surface. These endpoints are independent of
//! the in-process route synthesizer and transfer state machine consumed by
//! UI layers; they exist for external API consumers and integration poking.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// Build the gateway router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/compare-routes", post(handlers::compare_routes))
        .route("/api/execute-transfer", post(handlers::execute_transfer))
        .route("/api/generate-proof", post(handlers::generate_proof))
        .route("/api/health", get(handlers::health_check))
        .route("/api/test-db", get(handlers::test_db))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("💸 Routes:   POST /api/compare-routes");
    println!("🧾 Proofs:   POST /api/generate-proof");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
