//! Core type definitions used across the Filekeep workspace.

pub mod id;
pub mod job;
pub mod pagination;

pub use id::{ObjectId, ParentId};
pub use job::ThumbnailJob;
pub use pagination::{PAGE_SIZE, PageRequest};
