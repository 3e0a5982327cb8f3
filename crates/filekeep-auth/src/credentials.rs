//! `Authorization: Basic` header parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use filekeep_core::error::AppError;

const BASIC_SCHEME: &str = "Basic ";

/// An email/password pair supplied at login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Decode `Basic base64(email:password)`.
    ///
    /// The pair is split on the first `:` so passwords may contain colons.
    /// Every failure, including an empty field, is `Unauthorized`.
    pub fn from_basic_header(header: &str) -> Result<Self, AppError> {
        let encoded = header
            .strip_prefix(BASIC_SCHEME)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AppError::unauthorized("Unauthorized"))?;
        let decoded =
            String::from_utf8(decoded).map_err(|_| AppError::unauthorized("Unauthorized"))?;

        let (email, password) = decoded
            .split_once(':')
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        if email.is_empty() || password.is_empty() {
            return Err(AppError::unauthorized("Unauthorized"));
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
