//! File entity model.

use serde::{Deserialize, Serialize};

use filekeep_core::error::AppError;
use filekeep_core::types::{ObjectId, ParentId};

use super::kind::FileKind;

/// A file, image or folder owned by one user.
///
/// `local_path` is present exactly when the kind has content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: ObjectId,
    /// The owner. Never changes.
    pub user_id: ObjectId,
    /// Client-supplied display name.
    pub name: String,
    /// File, image or folder.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Whether anyone may read the content.
    pub is_public: bool,
    /// Containing folder, or the top level.
    pub parent_id: ParentId,
    /// Blob location; `None` for folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl File {
    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.user_id == *user_id
    }

    /// Whether `requester` (`None` for anonymous) may read the content.
    pub fn is_readable_by(&self, requester: Option<&ObjectId>) -> bool {
        self.is_public || requester.is_some_and(|id| self.is_owned_by(id))
    }
}

/// Data required to create a new file document.
#[derive(Debug, Clone)]
pub struct CreateFile {
    pub user_id: ObjectId,
    pub name: String,
    pub kind: FileKind,
    pub is_public: bool,
    pub parent_id: ParentId,
    pub local_path: Option<String>,
}

impl CreateFile {
    /// A folder document. Folders never reference a blob.
    pub fn folder(user_id: ObjectId, name: String, parent_id: ParentId, is_public: bool) -> Self {
        Self {
            user_id,
            name,
            kind: FileKind::Folder,
            is_public,
            parent_id,
            local_path: None,
        }
    }

    /// A document backed by the blob stored at `local_path`.
    pub fn with_content(
        user_id: ObjectId,
        name: String,
        kind: FileKind,
        parent_id: ParentId,
        is_public: bool,
        local_path: String,
    ) -> Result<Self, AppError> {
        if !kind.has_content() {
            return Err(AppError::internal("A folder cannot reference a blob"));
        }
        Ok(Self {
            user_id,
            name,
            kind,
            is_public,
            parent_id,
            local_path: Some(local_path),
        })
    }

    pub fn into_file(self, id: ObjectId) -> File {
        File {
            id,
            user_id: self.user_id,
            name: self.name,
            kind: self.kind,
            is_public: self.is_public,
            parent_id: self.parent_id,
            local_path: self.local_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_cannot_carry_content() {
        let result = CreateFile::with_content(
            ObjectId::new(),
            "docs".to_string(),
            FileKind::Folder,
            ParentId::Root,
            false,
            "/tmp/x".to_string(),
        );
        assert!(result.is_err());

        let folder = CreateFile::folder(ObjectId::new(), "docs".into(), ParentId::Root, false);
        assert!(folder.local_path.is_none());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let owner = ObjectId::new();
        let file = CreateFile::folder(owner, "docs".into(), ParentId::Root, true)
            .into_file(ObjectId::new());
        let value = serde_json::to_value(&file).unwrap();

        assert_eq!(value["type"], "folder");
        assert_eq!(value["parentId"], 0);
        assert_eq!(value["isPublic"], true);
        assert_eq!(value["userId"], owner.to_string());
        assert!(value.get("localPath").is_none());
    }

    #[test]
    fn private_files_are_readable_only_by_owner() {
        let owner = ObjectId::new();
        let mut file = CreateFile::with_content(
            owner,
            "a.txt".into(),
            FileKind::File,
            ParentId::Root,
            false,
            "/tmp/a".into(),
        )
        .unwrap()
        .into_file(ObjectId::new());

        assert!(file.is_readable_by(Some(&owner)));
        assert!(!file.is_readable_by(Some(&ObjectId::new())));
        assert!(!file.is_readable_by(None));

        file.is_public = true;
        assert!(file.is_readable_by(None));
    }
}
