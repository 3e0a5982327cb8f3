//! Local filesystem blob store.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::result::AppResult;
use filekeep_core::traits::blob::{BlobMeta, BlobStore, is_valid_variant, variant_path};

/// Stores each blob as one file under `root`, named by a random UUID.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a store rooted at `root`. The directory is created lazily by
    /// [`BlobStore::ensure_root`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_error(path: &str, e: io::Error) -> AppError {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("Blob not found: {path}"))
        } else {
            AppError::with_source(ErrorKind::Storage, format!("Failed to read blob: {path}"), e)
        }
    }

    async fn write_at(&self, path: &Path, data: &Bytes) -> AppResult<String> {
        fs::write(path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {}", path.display()),
                e,
            )
        })?;
        let path = path.to_string_lossy().into_owned();
        debug!(path = %path, bytes = data.len(), "Wrote blob");
        Ok(path)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn ensure_root(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", self.root.display()),
                e,
            )
        })
    }

    async fn write(&self, data: Bytes) -> AppResult<String> {
        let path = self.root.join(Uuid::new_v4().to_string());
        self.write_at(&path, &data).await
    }

    async fn write_variant(&self, path: &str, variant: &str, data: Bytes) -> AppResult<String> {
        if !is_valid_variant(variant) {
            return Err(AppError::validation(format!("Invalid variant name: '{variant}'")));
        }
        let target = PathBuf::from(variant_path(path, variant));
        self.write_at(&target, &data).await
    }

    async fn read(&self, path: &str) -> AppResult<Bytes> {
        let data = fs::read(path)
            .await
            .map_err(|e| Self::read_error(path, e))?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        fs::try_exists(path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to stat blob: {path}"), e)
        })
    }

    async fn stat(&self, path: &str) -> AppResult<Option<BlobMeta>> {
        match fs::metadata(path).await {
            Ok(meta) => Ok(Some(BlobMeta {
                size_bytes: meta.len(),
                is_file: meta.is_file(),
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat blob: {path}"),
                e,
            )),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false))
    }
}
