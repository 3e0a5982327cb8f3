//! File metadata, blob placement and public reads.

use std::sync::Arc;

use tracing::{debug, info, warn};

use filekeep_core::error::AppError;
use filekeep_core::traits::blob::{BlobStore, is_valid_variant, variant_path};
use filekeep_core::traits::dispatch::JobDispatcher;
use filekeep_core::types::{ObjectId, PageRequest, ParentId, ThumbnailJob};
use filekeep_database::store::FileStore;
use filekeep_entity::file::{CreateFile, File, FileKind};
use filekeep_storage::content_type;

use super::request::{CreateFileRequest, FileContent};

/// Creates, lists, publishes and serves files.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
    jobs: Arc<dyn JobDispatcher>,
}

impl FileService {
    pub fn new(
        files: Arc<dyn FileStore>,
        blobs: Arc<dyn BlobStore>,
        jobs: Arc<dyn JobDispatcher>,
    ) -> Self {
        Self { files, blobs, jobs }
    }

    /// Create a folder, or store content and create a file or image.
    ///
    /// The blob is written before the metadata row; a failed insert leaves
    /// the blob orphaned. Images additionally get a thumbnail job.
    pub async fn create_file(
        &self,
        owner: &ObjectId,
        req: CreateFileRequest,
    ) -> Result<File, AppError> {
        let req = req.validate()?;

        if let ParentId::Folder(parent_id) = &req.parent_id {
            let parent = self.files.find_by_id(parent_id).await?;
            if !parent.is_some_and(|p| p.is_folder()) {
                return Err(AppError::validation("Invalid parent folder"));
            }
        }

        let create = match req.content {
            None => CreateFile::folder(*owner, req.name, req.parent_id, req.is_public),
            Some(content) => {
                self.blobs.ensure_root().await?;
                let local_path = self.blobs.write(content).await?;
                CreateFile::with_content(
                    *owner,
                    req.name,
                    req.kind,
                    req.parent_id,
                    req.is_public,
                    local_path,
                )?
            }
        };

        let file = self.files.insert(create).await?;
        info!(user_id = %owner, file_id = %file.id, kind = %file.kind, "File created");

        if file.kind == FileKind::Image {
            self.enqueue_thumbnails(&file).await;
        }

        Ok(file)
    }

    async fn enqueue_thumbnails(&self, file: &File) {
        let job = ThumbnailJob::new(file.user_id, file.id);
        if let Err(e) = self.jobs.enqueue(job).await {
            warn!(file_id = %file.id, error = %e, "Failed to enqueue thumbnail job");
        }
    }

    /// One of the owner's files. Anything else is `NotFound`.
    pub async fn get_file(&self, owner: &ObjectId, id: &str) -> Result<File, AppError> {
        let id = ObjectId::parse_lenient(id);
        self.files
            .find_owned(&id, owner)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// One page of the owner's direct children of `parent`, newest first.
    pub async fn list_files(
        &self,
        owner: &ObjectId,
        parent: &ParentId,
        page: PageRequest,
    ) -> Result<Vec<File>, AppError> {
        self.files.find_children(owner, parent, page).await
    }

    /// Publish or unpublish one of the owner's files.
    pub async fn set_visibility(
        &self,
        owner: &ObjectId,
        id: &str,
        is_public: bool,
    ) -> Result<File, AppError> {
        let id = ObjectId::parse_lenient(id);
        let file = self
            .files
            .set_public(&id, owner, is_public)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        debug!(user_id = %owner, file_id = %file.id, is_public, "Visibility changed");
        Ok(file)
    }

    /// Content of a public file, or of a private one read by its owner.
    ///
    /// `size` selects a derived variant such as a thumbnail width.
    pub async fn read_file_content(
        &self,
        requester: Option<&ObjectId>,
        id: &str,
        size: Option<&str>,
    ) -> Result<FileContent, AppError> {
        let id = ObjectId::parse_lenient(id);
        let file = self
            .files
            .find_by_id(&id)
            .await?
            .filter(|f| f.is_readable_by(requester))
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if file.is_folder() {
            return Err(AppError::bad_request("A folder doesn't have content"));
        }

        let local_path = file
            .local_path
            .as_deref()
            .ok_or_else(|| AppError::internal(format!("File {} has no content path", file.id)))?;

        let path = match size {
            None => local_path.to_string(),
            Some(variant) if is_valid_variant(variant) => variant_path(local_path, variant),
            Some(_) => return Err(AppError::not_found("Not found")),
        };

        match self.blobs.stat(&path).await? {
            Some(meta) if meta.is_file => {}
            _ => return Err(AppError::not_found("Not found")),
        }

        let data = self.blobs.read(&path).await?;
        Ok(FileContent {
            data,
            content_type: content_type::from_name(&file.name),
        })
    }
}
