//! # filekeep-entity
//!
//! Domain entity models for Filekeep. Every struct in this crate is a
//! stored document or a value handed between the services.

pub mod file;
pub mod session;
pub mod user;
