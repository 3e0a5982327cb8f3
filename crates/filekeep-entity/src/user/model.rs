//! User entity model.

use serde::{Deserialize, Serialize};

use filekeep_core::types::ObjectId;

/// A registered user. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: ObjectId,
    /// Unique login email.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Data required to create a new user document.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

impl CreateUser {
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
