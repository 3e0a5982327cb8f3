//! # filekeep-core
//!
//! Core crate for Filekeep. Contains the store traits, configuration
//! schemas, typed identifiers, pagination and the unified error system.
//!
//! This crate has **no** internal dependencies on other Filekeep crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
