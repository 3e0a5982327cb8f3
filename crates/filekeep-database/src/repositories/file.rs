//! File repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::result::AppResult;
use filekeep_core::types::{ObjectId, PageRequest, ParentId};
use filekeep_entity::file::{CreateFile, File, FileKind};

use super::{decode_id, sql_offset};
use crate::store::FileStore;

const FILE_COLUMNS: &str = "id, user_id, name, kind, is_public, parent_id, local_path";

#[derive(Debug, FromRow)]
struct FileRow {
    id: String,
    user_id: String,
    name: String,
    kind: String,
    is_public: bool,
    parent_id: String,
    local_path: Option<String>,
}

impl TryFrom<FileRow> for File {
    type Error = AppError;

    fn try_from(row: FileRow) -> Result<Self, Self::Error> {
        let kind: FileKind = row.kind.parse().map_err(|_| {
            AppError::database(format!("Corrupt files.kind value '{}'", row.kind))
        })?;
        let parent_id = if row.parent_id == ParentId::ROOT_SENTINEL {
            ParentId::Root
        } else {
            ParentId::Folder(decode_id("files.parent_id", &row.parent_id)?)
        };
        Ok(File {
            id: decode_id("files.id", &row.id)?,
            user_id: decode_id("files.user_id", &row.user_id)?,
            name: row.name,
            kind,
            is_public: row.is_public,
            parent_id,
            local_path: row.local_path,
        })
    }
}

fn map_rows(rows: Vec<FileRow>) -> AppResult<Vec<File>> {
    rows.into_iter().map(File::try_from).collect()
}

/// Repository for the `files` table.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, FileRow>(&format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1"))
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))?
            .map(File::try_from)
            .transpose()
    }

    async fn find_owned(&self, id: &ObjectId, owner: &ObjectId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, FileRow>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.to_hex())
        .bind(owner.to_hex())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))?
        .map(File::try_from)
        .transpose()
    }

    async fn insert(&self, file: CreateFile) -> AppResult<File> {
        let file = file.into_file(ObjectId::new());
        sqlx::query(
            "INSERT INTO files (id, user_id, name, kind, is_public, parent_id, local_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(file.id.to_hex())
        .bind(file.user_id.to_hex())
        .bind(&file.name)
        .bind(file.kind.as_str())
        .bind(file.is_public)
        .bind(file.parent_id.to_string())
        .bind(&file.local_path)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))?;
        Ok(file)
    }

    async fn set_public(
        &self,
        id: &ObjectId,
        owner: &ObjectId,
        is_public: bool,
    ) -> AppResult<Option<File>> {
        sqlx::query_as::<_, FileRow>(&format!(
            "UPDATE files SET is_public = $3 WHERE id = $1 AND user_id = $2 RETURNING {FILE_COLUMNS}"
        ))
        .bind(id.to_hex())
        .bind(owner.to_hex())
        .bind(is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update file visibility", e)
        })?
        .map(File::try_from)
        .transpose()
    }

    async fn find_children(
        &self,
        owner: &ObjectId,
        parent: &ParentId,
        page: PageRequest,
    ) -> AppResult<Vec<File>> {
        let rows = sqlx::query_as::<_, FileRow>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE user_id = $1 AND parent_id = $2 \
             ORDER BY id COLLATE \"C\" DESC LIMIT $3 OFFSET $4"
        ))
        .bind(owner.to_hex())
        .bind(parent.to_string())
        .bind(page.limit() as i64)
        .bind(sql_offset(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;

        map_rows(rows)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(total.max(0) as u64)
    }
}
