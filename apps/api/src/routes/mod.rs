pub mod config;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

/// Multipart submissions are capped at 10 MB.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/config",
            get(config::handle_get_config).post(config::handle_update_config),
        )
        .route("/api/assessment", post(handlers::handle_submit_assessment))
        .route("/api/assessment/:id", get(handlers::handle_get_assessment))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
