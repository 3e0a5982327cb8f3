//! Health and statistics handlers.

use axum::Json;
use axum::extract::State;

use filekeep_service::{AppStats, AppStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /status
pub async fn status(State(state): State<AppState>) -> Json<AppStatus> {
    Json(state.status.status().await)
}

/// GET /stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<AppStats>, ApiError> {
    Ok(Json(state.status.stats().await?))
}
