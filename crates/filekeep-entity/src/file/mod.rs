//! File entity (files, images and folders).

pub mod kind;
pub mod model;

pub use kind::FileKind;
pub use model::{CreateFile, File};
