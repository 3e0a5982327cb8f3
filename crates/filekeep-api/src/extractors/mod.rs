//! Custom Axum extractors.

pub mod auth;
pub mod query;

pub use auth::{AuthUser, MaybeUser, TOKEN_HEADER};
pub use query::{DataQuery, ListQuery};
