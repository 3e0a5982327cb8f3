//! PostgreSQL implementations of the store traits.

pub mod file;
pub mod user;

pub use file::FileRepository;
pub use user::UserRepository;

use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::types::ObjectId;

/// Decode a stored id, treating malformed values as corrupt rows.
pub(crate) fn decode_id(column: &str, raw: &str) -> Result<ObjectId, AppError> {
    raw.parse().map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Corrupt {column} value '{raw}'"),
            e,
        )
    })
}

/// Convert a page offset to the signed type Postgres expects.
pub(crate) fn sql_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}
