//! Store traits and the [`PersistentStore`] facade.
//!
//! The traits mirror the four document operations the services rely on:
//! find one, insert one, update one and a paged aggregation of children.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use filekeep_core::config::DatabaseConfig;
use filekeep_core::error::AppError;
use filekeep_core::result::AppResult;
use filekeep_core::types::{ObjectId, PageRequest, ParentId};
use filekeep_entity::file::{CreateFile, File};
use filekeep_entity::user::{CreateUser, User};

use crate::connection::DatabasePool;
use crate::memory::{MemoryFileStore, MemoryUserStore};
use crate::repositories::{FileRepository, UserRepository};

/// The `users` collection.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    async fn count(&self) -> AppResult<u64>;
}

/// The `files` collection.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<File>>;

    /// Find a file only if `owner` owns it.
    async fn find_owned(&self, id: &ObjectId, owner: &ObjectId) -> AppResult<Option<File>>;

    async fn insert(&self, file: CreateFile) -> AppResult<File>;

    /// Set the visibility flag of an owned file and return the updated document.
    async fn set_public(
        &self,
        id: &ObjectId,
        owner: &ObjectId,
        is_public: bool,
    ) -> AppResult<Option<File>>;

    /// Direct children of `parent` owned by `owner`, newest first.
    async fn find_children(
        &self,
        owner: &ObjectId,
        parent: &ParentId,
        page: PageRequest,
    ) -> AppResult<Vec<File>>;

    async fn count(&self) -> AppResult<u64>;
}

/// Handles to both collections plus the connection they share.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    users: Arc<dyn UserStore>,
    files: Arc<dyn FileStore>,
    pool: Option<DatabasePool>,
}

impl PersistentStore {
    /// Open the backend selected by `config.provider`.
    ///
    /// The PostgreSQL backend runs pending migrations before returning.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = DatabasePool::open(config).await?;
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.handle())),
                    files: Arc::new(FileRepository::new(pool.handle())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Using in-memory document store; data is lost on exit");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            files: Arc::new(MemoryFileStore::new()),
            pool: None,
        }
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    pub fn files(&self) -> Arc<dyn FileStore> {
        Arc::clone(&self.files)
    }

    /// Whether the backend answers. Failures are logged and reported as `false`.
    pub async fn is_alive(&self) -> bool {
        match &self.pool {
            None => true,
            Some(pool) => pool.ping().await,
        }
    }

    pub async fn nb_users(&self) -> AppResult<u64> {
        self.users.count().await
    }

    pub async fn nb_files(&self) -> AppResult<u64> {
        self.files.count().await
    }

    /// Close pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_is_alive_and_counts() {
        let store = PersistentStore::in_memory();
        assert!(store.is_alive().await);

        store
            .users()
            .insert(CreateUser {
                email: "a@b.com".into(),
                password_hash: "h".into(),
            })
            .await
            .unwrap();

        assert_eq!(store.nb_users().await.unwrap(), 1);
        assert_eq!(store.nb_files().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_provider_is_a_configuration_error() {
        let config = DatabaseConfig {
            provider: "mongo".into(),
            ..DatabaseConfig::default()
        };
        let err = PersistentStore::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, filekeep_core::error::ErrorKind::Configuration);
    }
}
