//! Request and response shapes for file operations.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use serde::Deserialize;

use filekeep_core::error::AppError;
use filekeep_core::types::ParentId;
use filekeep_entity::file::FileKind;

/// Standard alphabet; trailing `=` may be present or not.
const CONTENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Body of a file creation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub parent_id: ParentId,
    #[serde(default)]
    pub is_public: bool,
    /// Base64-encoded content. Ignored for folders.
    #[serde(default)]
    pub data: Option<String>,
}

/// A creation request that passed field validation.
#[derive(Debug, Clone)]
pub(crate) struct ValidatedFile {
    pub name: String,
    pub kind: FileKind,
    pub parent_id: ParentId,
    pub is_public: bool,
    /// Decoded content; `None` exactly for folders.
    pub content: Option<Bytes>,
}

impl CreateFileRequest {
    /// Check the fields in a fixed order and decode the content.
    ///
    /// The first failing check decides the message.
    pub(crate) fn validate(self) -> Result<ValidatedFile, AppError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("Missing name"))?;

        let kind: FileKind = self
            .kind
            .as_deref()
            .ok_or_else(|| AppError::validation("Invalid type"))?
            .parse()?;

        let content = if kind.has_content() {
            let data = self
                .data
                .filter(|d| !d.is_empty())
                .ok_or_else(|| AppError::validation("Missing data"))?;
            let decoded = CONTENT_ENGINE
                .decode(data.as_bytes())
                .map_err(|_| AppError::validation("Invalid data"))?;
            Some(Bytes::from(decoded))
        } else {
            None
        };

        Ok(ValidatedFile {
            name,
            kind,
            parent_id: self.parent_id,
            is_public: self.is_public,
            content,
        })
    }
}

/// Raw bytes of a stored file and the type they should be served as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub data: Bytes,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, kind: Option<&str>, data: Option<&str>) -> CreateFileRequest {
        CreateFileRequest {
            name: name.map(String::from),
            kind: kind.map(String::from),
            data: data.map(String::from),
            ..Default::default()
        }
    }

    fn message(req: CreateFileRequest) -> String {
        req.validate().unwrap_err().message
    }

    #[test]
    fn checks_run_in_order() {
        assert_eq!(message(request(None, Some("nope"), None)), "Missing name");
        assert_eq!(message(request(Some(""), None, None)), "Missing name");
        assert_eq!(message(request(Some("a"), None, None)), "Invalid type");
        assert_eq!(message(request(Some("a"), Some("dir"), None)), "Invalid type");
        assert_eq!(message(request(Some("a"), Some("file"), None)), "Missing data");
        assert_eq!(message(request(Some("a"), Some("file"), Some(""))), "Missing data");
        assert_eq!(
            message(request(Some("a"), Some("image"), Some("*not base64*"))),
            "Invalid data"
        );
    }

    #[test]
    fn padding_is_optional() {
        let padded = request(Some("a"), Some("file"), Some("SGVsbG8=")).validate().unwrap();
        let bare = request(Some("a"), Some("file"), Some("SGVsbG8")).validate().unwrap();
        assert_eq!(padded.content, Some(Bytes::from_static(b"Hello")));
        assert_eq!(bare.content, padded.content);
    }

    #[test]
    fn folders_ignore_data() {
        let folder = request(Some("docs"), Some("folder"), Some("*junk*"))
            .validate()
            .unwrap();
        assert_eq!(folder.kind, FileKind::Folder);
        assert!(folder.content.is_none());
    }

    #[test]
    fn deserializes_wire_names_with_defaults() {
        let req: CreateFileRequest =
            serde_json::from_str(r#"{"name":"a.txt","type":"file","data":"eA=="}"#).unwrap();
        assert_eq!(req.kind.as_deref(), Some("file"));
        assert_eq!(req.parent_id, ParentId::Root);
        assert!(!req.is_public);

        let req: CreateFileRequest =
            serde_json::from_str(r#"{"name":"a","type":"folder","parentId":"0","isPublic":true}"#)
                .unwrap();
        assert_eq!(req.parent_id, ParentId::Root);
        assert!(req.is_public);
    }
}
