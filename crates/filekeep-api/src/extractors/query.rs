//! Query-string parameters.
//!
//! Values stay raw strings so that malformed input degrades to defaults
//! instead of rejecting the request.

use serde::Deserialize;

use filekeep_core::types::{PageRequest, ParentId};

/// `GET /files?parentId=&page=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub parent_id: Option<String>,
    pub page: Option<String>,
}

impl ListQuery {
    pub fn parent(&self) -> ParentId {
        self.parent_id
            .as_deref()
            .map(ParentId::parse_lenient)
            .unwrap_or_default()
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::parse_lenient(self.page.as_deref())
    }
}

/// `GET /files/{id}/data?size=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataQuery {
    pub size: Option<String>,
}
