//! Document identifiers and the parent-folder reference.
//!
//! [`ObjectId`] is a 12-byte identifier rendered as 24 lowercase hex
//! characters. The leading four bytes hold the creation time in seconds,
//! then five bytes fixed for the process, then a three-byte counter, so
//! byte order follows creation order within one process.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string is not a well-formed [`ObjectId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid object id: expected 24 hex characters")]
pub struct InvalidObjectId;

/// A 12-byte document identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// The all-zero id. Never generated, so a lookup by it finds nothing.
    pub const NIL: ObjectId = ObjectId([0; 12]);

    /// Generate a fresh identifier.
    pub fn new() -> Self {
        static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
        static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(1);
        let process = PROCESS_UNIQUE.get_or_init(|| rand::rng().random());
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::rng().random_range(0..0x80_0000)))
            .fetch_add(1, Ordering::Relaxed)
            & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Parse `raw`, mapping malformed input to [`ObjectId::NIL`].
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().unwrap_or(Self::NIL)
    }

    /// Lowercase hex form used in storage and on the wire.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidObjectId);
        }
        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| InvalidObjectId)?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Where a file lives: at the top level or inside a folder.
///
/// The top level is rendered externally as the number `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentId {
    #[default]
    Root,
    Folder(ObjectId),
}

impl ParentId {
    /// Stored and query-string form of [`ParentId::Root`].
    pub const ROOT_SENTINEL: &'static str = "0";

    /// Interpret a client-supplied reference. `"0"` is the top level; any
    /// other malformed value becomes a folder reference that never resolves.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == Self::ROOT_SENTINEL {
            Self::Root
        } else {
            Self::Folder(ObjectId::parse_lenient(raw))
        }
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(Self::ROOT_SENTINEL),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl From<ObjectId> for ParentId {
    fn from(id: ObjectId) -> Self {
        Self::Folder(id)
    }
}

impl Serialize for ParentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_u8(0),
            Self::Folder(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParentIdVisitor;

        impl Visitor<'_> for ParentIdVisitor {
            type Value = ParentId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0 or a folder id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ParentId, E> {
                Ok(if v == 0 {
                    ParentId::Root
                } else {
                    ParentId::Folder(ObjectId::NIL)
                })
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ParentId, E> {
                Ok(if v == 0 {
                    ParentId::Root
                } else {
                    ParentId::Folder(ObjectId::NIL)
                })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ParentId, E> {
                Ok(ParentId::parse_lenient(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<ParentId, E> {
                Ok(ParentId::Root)
            }
        }

        deserializer.deserialize_any(ParentIdVisitor)
    }
}
