//! Registration and the current-user profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use filekeep_auth::password::PasswordHasher;
use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::types::ObjectId;
use filekeep_database::store::UserStore;
use filekeep_entity::user::{CreateUser, User};

/// Body of a registration request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// The public face of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: ObjectId,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Handles user sign-up.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Create an account for a new email.
    pub async fn register(&self, req: RegisterRequest) -> Result<UserProfile, AppError> {
        let email = req
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::validation("Missing email"))?;
        let password = req
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::validation("Missing password"))?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Already exist"));
        }

        let password_hash = self.hasher.hash_password(&password)?;
        // A concurrent registration can still win the unique index.
        let user = self
            .users
            .insert(CreateUser {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => AppError::validation("Already exist"),
                _ => e,
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(UserProfile::from(&user))
    }

    pub fn me(&self, user: &User) -> UserProfile {
        UserProfile::from(user)
    }
}
