//! Cache key builders for every Filekeep cache entry.
//!
//! The Redis provider adds its configured prefix on top of these keys.

/// Key holding the user id bound to a session token.
pub fn session_token(token: &str) -> String {
    format!("auth_{token}")
}
