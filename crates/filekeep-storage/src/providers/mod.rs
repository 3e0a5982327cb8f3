//! Blob store providers.

pub mod local;
