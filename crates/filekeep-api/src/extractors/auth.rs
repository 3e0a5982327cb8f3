//! Identity extractors built on the `X-Token` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filekeep_core::error::AppError;
use filekeep_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "x-token";

fn token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|t| !t.is_empty())
}

/// A request made with a live session. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token(parts).ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
        let user = state
            .auth
            .resolve_user(Some(token))
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

/// The requesting user if a live token was sent, `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state.auth.resolve_user(token(parts)).await?;
        Ok(MaybeUser(user))
    }
}
