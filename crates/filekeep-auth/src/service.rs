//! Login, logout and token resolution.

use std::sync::Arc;

use tracing::{debug, info};

use filekeep_core::error::AppError;
use filekeep_database::store::UserStore;
use filekeep_entity::session::Session;
use filekeep_entity::user::User;

use crate::credentials::Credentials;
use crate::password::PasswordHasher;
use crate::session::SessionStore;
use crate::token;

/// Issues and revokes session tokens and resolves them back to users.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: SessionStore,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, sessions: SessionStore) -> Self {
        Self {
            users,
            sessions,
            hasher: PasswordHasher::new(),
        }
    }

    /// Authenticate the raw `Authorization` header value and open a session.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn connect(&self, authorization: Option<&str>) -> Result<Session, AppError> {
        let header = authorization.ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
        let credentials = Credentials::from_basic_header(header)?;

        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        if !self
            .hasher
            .verify_password(&credentials.password, &user.password_hash)?
        {
            debug!(user_id = %user.id, "Rejected login with wrong password");
            return Err(AppError::unauthorized("Unauthorized"));
        }

        let session = self.sessions.create_session(token::generate(), user.id).await?;
        info!(user_id = %user.id, "User connected");
        Ok(session)
    }

    /// Revoke `token`. Revoking an unknown token is not an error.
    pub async fn disconnect(&self, token: &str) -> Result<(), AppError> {
        self.sessions.remove(token).await
    }

    /// The user behind `token`, or `None` for anonymous or stale tokens.
    pub async fn resolve_user(&self, token: Option<&str>) -> Result<Option<User>, AppError> {
        let Some(token) = token else {
            return Ok(None);
        };
        let Some(user_id) = self.sessions.user_id(token).await? else {
            return Ok(None);
        };
        self.users.find_by_id(&user_id).await
    }
}
