//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use filekeep_auth::AuthService;
use filekeep_service::{FileService, StatusService, UserService};

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub files: Arc<FileService>,
    pub status: Arc<StatusService>,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}
