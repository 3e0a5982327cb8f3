//! # filekeep-storage
//!
//! Local filesystem blob storage for Filekeep, plus thumbnail rendering
//! and content-type detection for stored files.

pub mod content_type;
pub mod providers;
pub mod thumbnail;

pub use providers::local::LocalBlobStore;
pub use thumbnail::ThumbnailGenerator;
