//! Response DTOs.

use serde::Serialize;

use filekeep_core::types::{ObjectId, ParentId};
use filekeep_entity::file::{File, FileKind};

/// Body of a successful `GET /connect`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A file record as returned to clients.
///
/// `localPath` only appears in the creation response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub is_public: bool,
    pub parent_id: ParentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl FileResponse {
    /// Include the blob path; used right after creation.
    pub fn created(file: File) -> Self {
        let local_path = file.local_path.clone();
        Self {
            local_path,
            ..Self::from(file)
        }
    }
}

impl From<File> for FileResponse {
    fn from(file: File) -> Self {
        Self {
            id: file.id,
            user_id: file.user_id,
            name: file.name,
            kind: file.kind,
            is_public: file.is_public,
            parent_id: file.parent_id,
            local_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filekeep_entity::file::CreateFile;

    fn image() -> File {
        CreateFile::with_content(
            ObjectId::new(),
            "a.png".into(),
            FileKind::Image,
            ParentId::Root,
            false,
            "/tmp/files_manager/x".into(),
        )
        .unwrap()
        .into_file(ObjectId::new())
    }

    #[test]
    fn local_path_only_on_creation() {
        let plain = serde_json::to_value(FileResponse::from(image())).unwrap();
        assert!(plain.get("localPath").is_none());
        assert_eq!(plain["parentId"], 0);
        assert_eq!(plain["type"], "image");

        let created = serde_json::to_value(FileResponse::created(image())).unwrap();
        assert_eq!(created["localPath"], "/tmp/files_manager/x");
    }
}
