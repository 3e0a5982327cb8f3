//! Thumbnail job handed to the derived-asset queue.

use serde::{Deserialize, Serialize};

use super::id::ObjectId;

/// Request to render thumbnails for one image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailJob {
    pub user_id: ObjectId,
    pub file_id: ObjectId,
    pub label: String,
}

impl ThumbnailJob {
    pub fn new(user_id: ObjectId, file_id: ObjectId) -> Self {
        Self {
            user_id,
            file_id,
            label: format!("Image thumbnail [{user_id}-{file_id}]"),
        }
    }
}
