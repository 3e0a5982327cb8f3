//! # filekeep-api
//!
//! HTTP API layer for Filekeep built on Axum.
//!
//! Provides the REST endpoints, the token extractors, DTOs and the
//! mapping from [`AppError`](filekeep_core::AppError) to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
