//! Traits at the seams between the services and their backends.

pub mod blob;
pub mod cache;
pub mod dispatch;

pub use blob::{BlobMeta, BlobStore};
pub use cache::CacheProvider;
pub use dispatch::JobDispatcher;
