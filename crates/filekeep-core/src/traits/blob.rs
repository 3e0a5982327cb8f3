//! Blob store trait for uploaded file content.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Filesystem facts about a stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobMeta {
    pub size_bytes: u64,
    pub is_file: bool,
}

/// Placement of raw file content under a root directory.
///
/// Paths handed out by [`BlobStore::write`] are the only references to
/// stored bytes; callers persist them verbatim.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Root directory holding every blob.
    fn root(&self) -> &Path;

    /// Create the root directory and any missing ancestors.
    async fn ensure_root(&self) -> AppResult<()>;

    /// Store `data` under a freshly generated name and return its path.
    async fn write(&self, data: Bytes) -> AppResult<String>;

    /// Store a derived variant next to `path` and return the variant path.
    async fn write_variant(&self, path: &str, variant: &str, data: Bytes) -> AppResult<String>;

    /// Read a blob into memory.
    async fn read(&self, path: &str) -> AppResult<Bytes>;

    /// Whether anything exists at `path`.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Metadata for `path`, or `None` if nothing is there.
    async fn stat(&self, path: &str) -> AppResult<Option<BlobMeta>>;

    /// Check that the root directory is usable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Path of the `variant` sibling of the blob at `path`.
pub fn variant_path(path: &str, variant: &str) -> String {
    format!("{path}_{variant}")
}

/// Variant names are non-empty ASCII alphanumerics, so a variant path
/// always stays next to its original.
pub fn is_valid_variant(variant: &str) -> bool {
    !variant.is_empty() && variant.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_paths_are_suffixed_siblings() {
        assert_eq!(variant_path("/data/abc", "500"), "/data/abc_500");
    }

    #[test]
    fn variants_reject_path_tricks() {
        assert!(is_valid_variant("250"));
        assert!(is_valid_variant("small"));
        assert!(!is_valid_variant(""));
        assert!(!is_valid_variant("../x"));
        assert!(!is_valid_variant("1/2"));
    }
}
