//! # filekeep-cache
//!
//! Expiring key-value providers for Filekeep sessions:
//!
//! - **memory**: in-process cache using [moka](https://crates.io/crates/moka)
//!   with a TTL per entry
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
