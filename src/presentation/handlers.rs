// HTTP request handlers
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/tram", get(tram))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Latest vehicle snapshot as JSON. Only reads the store, never the network.
pub async fn tram(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.current().await;
    json_response(snapshot.as_ref())
}
