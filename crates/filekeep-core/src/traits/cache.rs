//! Cache provider trait for the expiring key-value store.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for expiring key-value backends (Redis or in-memory).
///
/// Values are plain strings. The provider enforces the TTL given on
/// `set`; an expired key behaves exactly like an absent one.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value with a TTL, replacing any previous value and expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists in the cache.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Check that the cache backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
