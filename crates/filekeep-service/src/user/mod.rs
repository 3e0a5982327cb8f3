//! User registration and profile.

pub mod service;

pub use service::{RegisterRequest, UserProfile, UserService};
