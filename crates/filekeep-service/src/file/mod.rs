//! File and folder operations.

pub mod request;
pub mod service;

pub use request::{CreateFileRequest, FileContent};
pub use service::FileService;
