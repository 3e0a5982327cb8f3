//! File kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a [`File`](super::File) document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A container for other files. Has no content.
    Folder,
    /// Arbitrary content.
    File,
    /// Image content; thumbnails are derived from it.
    Image,
}

impl FileKind {
    /// Whether documents of this kind own a blob.
    pub fn has_content(&self) -> bool {
        !matches!(self, Self::Folder)
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = filekeep_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            _ => Err(filekeep_core::AppError::validation("Invalid type")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_kinds_only() {
        assert_eq!("folder".parse::<FileKind>().unwrap(), FileKind::Folder);
        assert_eq!("image".parse::<FileKind>().unwrap(), FileKind::Image);
        let err = "Folder".parse::<FileKind>().unwrap_err();
        assert_eq!(err.message, "Invalid type");
    }

    #[test]
    fn only_folders_lack_content() {
        assert!(!FileKind::Folder.has_content());
        assert!(FileKind::File.has_content());
        assert!(FileKind::Image.has_content());
    }
}
