// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{Router, routing::get};
use chat::chat_ws_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/ws", get(chat_ws_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header, credentials included.
        .layer(CorsLayer::very_permissive())
}
