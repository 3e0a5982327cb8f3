//! Auth handlers: connect and disconnect.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};

use crate::dto::TokenResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /connect
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let session = state.auth.connect(authorization).await?;
    Ok(Json(TokenResponse {
        token: session.token,
    }))
}

/// GET /disconnect
pub async fn disconnect(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.auth.disconnect(&auth.token).await?;
    tracing::info!(user_id = %auth.user.id, "User disconnected");
    Ok(StatusCode::NO_CONTENT)
}
