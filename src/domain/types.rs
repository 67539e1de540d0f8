//! # Domain Types
//!
//! Common data structures exchanged across the tool boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marker reported instead of a byte count for directories.
pub const DIRECTORY_SIZE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// Size column of a listing: bytes for files, `"-"` for directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySize {
    Bytes(u64),
    Directory,
}

impl Serialize for EntrySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntrySize::Bytes(n) => serializer.serialize_u64(*n),
            EntrySize::Directory => serializer.serialize_str(DIRECTORY_SIZE),
        }
    }
}

impl<'de> Deserialize<'de> for EntrySize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bytes(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bytes(n) => Ok(EntrySize::Bytes(n)),
            Raw::Text(s) if s == DIRECTORY_SIZE => Ok(EntrySize::Directory),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid size marker: {s:?}"
            ))),
        }
    }
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: EntrySize,
}

impl FileEntry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size: EntrySize::Bytes(size),
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            size: EntrySize::Directory,
        }
    }
}

/// Outcome of one invocation as seen by a caller.
///
/// `ok` comes from the protocol's error flag, never from the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub ok: bool,
    pub text: String,
}

impl ToolOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: text.into(),
        }
    }

    /// Converts into a plain `Result`, keeping the text on both sides.
    pub fn into_result(self) -> Result<String, String> {
        if self.ok { Ok(self.text) } else { Err(self.text) }
    }
}

impl fmt::Display for ToolOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
