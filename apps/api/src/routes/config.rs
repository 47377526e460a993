use axum::{extract::State, Json};

use crate::models::config::{AppConfig, AppConfigUpdate};
use crate::state::AppState;

/// GET /api/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<AppConfig> {
    Json(state.store.app_config())
}

/// POST /api/config
///
/// Accepts a partial config and returns the merged row. Absent fields keep
/// their current values.
pub async fn handle_update_config(
    State(state): State<AppState>,
    Json(update): Json<AppConfigUpdate>,
) -> Json<AppConfig> {
    Json(state.store.update_app_config(update))
}
