//! Response bodies.

pub mod response;

pub use response::{FileResponse, TokenResponse};
