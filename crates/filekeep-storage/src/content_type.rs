//! Content-type detection from file names.

/// Served when the extension is missing or unknown.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Guess the content type of a stored file from its display name.
pub fn from_name(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}
