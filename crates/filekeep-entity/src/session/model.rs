//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filekeep_core::types::ObjectId;

/// A live login session.
///
/// Only `token -> user_id` is persisted in the session store; the store
/// enforces `expires_at` through its TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// The authenticated user.
    pub user_id: ObjectId,
    /// When the store forgets the token.
    pub expires_at: DateTime<Utc>,
}
