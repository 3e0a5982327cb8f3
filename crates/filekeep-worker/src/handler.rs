//! Thumbnail job handling.

use std::sync::Arc;

use tracing::info;

use filekeep_core::error::AppError;
use filekeep_core::types::ThumbnailJob;
use filekeep_database::store::FileStore;
use filekeep_entity::file::FileKind;
use filekeep_storage::ThumbnailGenerator;

/// Error from job execution.
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// The job can never succeed; it is dropped.
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// A backend failed while processing the job.
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}

/// Renders the thumbnails of one image file.
#[derive(Debug, Clone)]
pub struct ThumbnailJobHandler {
    files: Arc<dyn FileStore>,
    generator: ThumbnailGenerator,
}

impl ThumbnailJobHandler {
    pub fn new(files: Arc<dyn FileStore>, generator: ThumbnailGenerator) -> Self {
        Self { files, generator }
    }

    /// Load the image named by `job` and write one thumbnail per width.
    ///
    /// The file must match both the job's file id and its owner.
    pub async fn execute(&self, job: &ThumbnailJob) -> Result<Vec<String>, JobExecutionError> {
        let file = self
            .files
            .find_owned(&job.file_id, &job.user_id)
            .await?
            .ok_or_else(|| JobExecutionError::Permanent(format!("File not found: {}", job.file_id)))?;

        if file.kind != FileKind::Image {
            return Err(JobExecutionError::Permanent(format!(
                "File {} is a {}, not an image",
                file.id, file.kind
            )));
        }

        let source = file.local_path.as_deref().ok_or_else(|| {
            JobExecutionError::Permanent(format!("Image {} has no content path", file.id))
        })?;

        let paths = self.generator.generate(source).await?;
        info!(
            file_id = %file.id,
            count = paths.len(),
            "Generated thumbnails"
        );
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use bytes::Bytes;
    use filekeep_core::traits::blob::BlobStore;
    use filekeep_core::types::{ObjectId, ParentId};
    use filekeep_database::PersistentStore;
    use filekeep_entity::file::CreateFile;
    use filekeep_storage::LocalBlobStore;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use tempfile::TempDir;

    fn png(width: u32, height: u32) -> Bytes {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        Bytes::from(out.into_inner())
    }

    async fn setup(root: &TempDir) -> (ThumbnailJobHandler, PersistentStore, Arc<LocalBlobStore>) {
        let store = PersistentStore::in_memory();
        let blobs = Arc::new(LocalBlobStore::new(root.path()));
        blobs.ensure_root().await.unwrap();
        let generator = ThumbnailGenerator::new(blobs.clone(), vec![100, 50]);
        (
            ThumbnailJobHandler::new(store.files(), generator),
            store,
            blobs,
        )
    }

    #[tokio::test]
    async fn image_job_renders_every_width() {
        let root = TempDir::new().unwrap();
        let (handler, store, blobs) = setup(&root).await;
        let owner = ObjectId::new();
        let path = blobs.write(png(400, 200)).await.unwrap();
        let image = store
            .files()
            .insert(
                CreateFile::with_content(
                    owner,
                    "pic.png".into(),
                    FileKind::Image,
                    ParentId::Root,
                    false,
                    path.clone(),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        let paths = handler
            .execute(&ThumbnailJob::new(owner, image.id))
            .await
            .unwrap();

        assert_eq!(paths, vec![format!("{path}_100"), format!("{path}_50")]);
        let thumb = image::load_from_memory(&std::fs::read(&paths[0]).unwrap()).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (100, 50));
    }

    #[tokio::test]
    async fn missing_or_foreign_files_fail_permanently() {
        let root = TempDir::new().unwrap();
        let (handler, store, _) = setup(&root).await;
        let owner = ObjectId::new();
        let folder = store
            .files()
            .insert(CreateFile::folder(owner, "docs".into(), ParentId::Root, false))
            .await
            .unwrap();

        for job in [
            ThumbnailJob::new(owner, ObjectId::new()),
            ThumbnailJob::new(ObjectId::new(), folder.id),
            ThumbnailJob::new(owner, folder.id),
        ] {
            let err = handler.execute(&job).await.unwrap_err();
            assert!(matches!(err, JobExecutionError::Permanent(_)), "{err}");
        }
    }
}
