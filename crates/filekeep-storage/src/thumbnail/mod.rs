//! Thumbnail rendering for image files.

pub mod generator;

pub use generator::ThumbnailGenerator;
