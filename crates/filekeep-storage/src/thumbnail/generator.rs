//! Thumbnail generator for image files.

use std::io::Cursor;
use std::sync::Arc;

use bytes::Bytes;
use image::imageops::FilterType;

use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::result::AppResult;
use filekeep_core::traits::blob::BlobStore;

/// Renders width-bounded copies of an image blob next to the original.
///
/// A thumbnail of width `w` for the blob at `path` is stored at
/// `path_w`, in the same encoding as the source.
#[derive(Debug, Clone)]
pub struct ThumbnailGenerator {
    blobs: Arc<dyn BlobStore>,
    widths: Vec<u32>,
}

impl ThumbnailGenerator {
    pub fn new(blobs: Arc<dyn BlobStore>, widths: Vec<u32>) -> Self {
        Self { blobs, widths }
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Render every configured width for the blob at `source_path`.
    ///
    /// Returns the paths of the written thumbnails.
    pub async fn generate(&self, source_path: &str) -> AppResult<Vec<String>> {
        let source = self.blobs.read(source_path).await?;

        let mut paths = Vec::with_capacity(self.widths.len());
        for &width in &self.widths {
            let data = source.clone();
            let thumbnail = tokio::task::spawn_blocking(move || Self::resize_image(&data, width))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Thumbnail task panicked", e)
                })??;

            let path = self
                .blobs
                .write_variant(source_path, &width.to_string(), thumbnail)
                .await?;
            tracing::debug!(source = source_path, width, output = %path, "Generated thumbnail");
            paths.push(path);
        }
        Ok(paths)
    }

    /// Scale an encoded image to `width` pixels wide, keeping its aspect ratio.
    pub fn resize_image(data: &[u8], width: u32) -> AppResult<Bytes> {
        if width == 0 {
            return Err(AppError::validation("Thumbnail width must be positive"));
        }
        let format = image::guess_format(data).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Unrecognized image format", e)
        })?;
        let source = image::load_from_memory_with_format(data, format).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Failed to decode image", e)
        })?;

        let resized = source.resize(width, u32::MAX, FilterType::Triangle);

        let mut out = Cursor::new(Vec::new());
        resized.write_to(&mut out, format).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to encode thumbnail", e)
        })?;
        Ok(Bytes::from(out.into_inner()))
    }
}
