//! # filekeep-service
//!
//! Business logic for Filekeep. Each service receives its store handles
//! at construction time as `Arc<dyn Trait>` and keeps no per-request state.

pub mod file;
pub mod status;
pub mod user;

pub use file::{CreateFileRequest, FileContent, FileService};
pub use status::{AppStats, AppStatus, StatusService};
pub use user::{RegisterRequest, UserProfile, UserService};
