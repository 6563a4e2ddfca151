// src/api/mod.rs

pub mod handler;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::AppState;

pub use handler::{analyze_get, analyze_post, health};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", get(analyze_get).post(analyze_post))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
