//! Session storage on top of the expiring cache.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use filekeep_cache::keys;
use filekeep_core::config::SessionConfig;
use filekeep_core::error::AppError;
use filekeep_core::traits::cache::CacheProvider;
use filekeep_core::types::ObjectId;
use filekeep_entity::session::Session;

/// Maps `auth_<token>` to the hex id of the logged-in user.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<dyn CacheProvider>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(cache: Arc<dyn CacheProvider>, config: &SessionConfig) -> Self {
        Self {
            cache,
            ttl: config.ttl(),
        }
    }

    /// Bind `token` to `user_id` for the configured TTL.
    pub async fn create_session(&self, token: String, user_id: ObjectId) -> Result<Session, AppError> {
        self.cache
            .set(&keys::session_token(&token), &user_id.to_hex(), self.ttl)
            .await?;

        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AppError::configuration(format!("Session TTL out of range: {e}")))?;

        Ok(Session {
            token,
            user_id,
            expires_at: Utc::now() + ttl,
        })
    }

    /// The user bound to `token`.
    ///
    /// An absent, expired or unparsable entry yields `None`.
    pub async fn user_id(&self, token: &str) -> Result<Option<ObjectId>, AppError> {
        let Some(raw) = self.cache.get(&keys::session_token(token)).await? else {
            return Ok(None);
        };

        match raw.parse::<ObjectId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                debug!(value = %raw, "Ignoring session with malformed user id");
                Ok(None)
            }
        }
    }

    /// Forget `token`. Succeeds whether or not it was bound.
    pub async fn remove(&self, token: &str) -> Result<(), AppError> {
        self.cache.delete(&keys::session_token(token)).await
    }

    /// Whether the backing cache answers.
    pub async fn is_alive(&self) -> bool {
        self.cache.health_check().await.unwrap_or(false)
    }
}
