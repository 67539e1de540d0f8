//! # Domain Traits
//!
//! Abstract interfaces for the resources the tools act upon.
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::EntryKind;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// What sits at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A regular file.
    File,
    Directory,
    /// Devices, FIFOs and sockets.
    Special,
}

impl NodeKind {
    /// Kind reported in directory listings. Special files list as files.
    pub fn listed_as(self) -> EntryKind {
        match self {
            NodeKind::Directory => EntryKind::Directory,
            NodeKind::File | NodeKind::Special => EntryKind::File,
        }
    }
}

/// A child of a directory as reported by [`FileSystem::list_children`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte length; meaningless for directories.
    pub len: u64,
}

/// Narrow filesystem capability used by the file tools.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Kind of the entry at `path`, following symlinks. `None` if nothing is there.
    async fn kind(&self, path: &Path) -> Option<NodeKind>;

    /// Immediate children of a directory, one level deep.
    async fn list_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>>;

    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Creates or truncates the file and writes `content`.
    async fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Removes an empty directory.
    async fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory and all of its contents.
    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn exists(&self, path: &Path) -> bool {
        self.kind(path).await.is_some()
    }

    async fn is_dir(&self, path: &Path) -> bool {
        self.kind(path).await == Some(NodeKind::Directory)
    }

    /// True only for regular files.
    async fn is_file(&self, path: &Path) -> bool {
        self.kind(path).await == Some(NodeKind::File)
    }
}
