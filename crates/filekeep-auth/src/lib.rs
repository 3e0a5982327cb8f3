//! # filekeep-auth
//!
//! Authentication for Filekeep.
//!
//! ## Modules
//!
//! - `credentials`: parsing of `Authorization: Basic` headers
//! - `password`: Argon2id password hashing
//! - `token`: opaque session token generation
//! - `session`: token to user bindings kept in the expiring cache
//! - `service`: the connect / disconnect / resolve flows

pub mod credentials;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use credentials::Credentials;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use session::SessionStore;
