//! User handlers: registration and profile.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use filekeep_service::{RegisterRequest, UserProfile};

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let Json(req) = body?;
    let profile = state.users.register(req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Json<UserProfile> {
    Json(state.users.me(&auth.user))
}
