//! Backend liveness and collection counts.

use std::sync::Arc;

use serde::Serialize;

use filekeep_auth::SessionStore;
use filekeep_core::error::AppError;
use filekeep_database::PersistentStore;

/// Whether the session cache and the document store answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppStatus {
    pub redis: bool,
    pub db: bool,
}

/// Number of stored users and files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppStats {
    pub users: u64,
    pub files: u64,
}

#[derive(Debug, Clone)]
pub struct StatusService {
    store: Arc<PersistentStore>,
    sessions: SessionStore,
}

impl StatusService {
    pub fn new(store: Arc<PersistentStore>, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }

    pub async fn status(&self) -> AppStatus {
        let (redis, db) = tokio::join!(self.sessions.is_alive(), self.store.is_alive());
        AppStatus { redis, db }
    }

    pub async fn stats(&self) -> Result<AppStats, AppError> {
        let (users, files) = tokio::try_join!(self.store.nb_users(), self.store.nb_files())?;
        Ok(AppStats { users, files })
    }
}
