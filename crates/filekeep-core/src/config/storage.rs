//! Blob storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::FOLDER_PATH_ENV;

/// Subfolder of the platform temp directory used when no root is configured.
pub const DEFAULT_ROOT_FOLDER: &str = "files_manager";

/// Blob storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding uploaded blobs.
    #[serde(default)]
    pub folder_path: Option<String>,
}

impl StorageConfig {
    /// Resolve the blob root: `folder_path`, then `FOLDER_PATH`, then
    /// `<temp_dir>/files_manager`.
    pub fn root_dir(&self) -> PathBuf {
        self.resolve_root(std::env::var(FOLDER_PATH_ENV).ok())
    }

    fn resolve_root(&self, from_env: Option<String>) -> PathBuf {
        let non_blank = |p: &str| {
            let p = p.trim();
            (!p.is_empty()).then(|| PathBuf::from(p))
        };
        self.folder_path
            .as_deref()
            .and_then(non_blank)
            .or_else(|| from_env.as_deref().and_then(non_blank))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_ROOT_FOLDER))
    }
}
