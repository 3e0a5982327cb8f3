//! # filekeep-database
//!
//! The persistent document store: `users` and `files` collections behind
//! the [`UserStore`] and [`FileStore`] traits, with a PostgreSQL backend
//! and an in-memory backend.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{FileStore, PersistentStore, UserStore};
