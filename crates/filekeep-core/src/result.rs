//! Convenience result type alias for Filekeep.

use crate::error::AppError;

/// A specialized `Result` type for Filekeep operations.
pub type AppResult<T> = Result<T, AppError>;
