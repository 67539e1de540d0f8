//! # Local Filesystem
//!
//! [`FileSystem`] backed by the host filesystem through `tokio::fs`.

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::domain::traits::{ChildEntry, FileSystem, NodeKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

fn kind_of(metadata: &std::fs::Metadata) -> NodeKind {
    if metadata.is_dir() {
        NodeKind::Directory
    } else if metadata.is_file() {
        NodeKind::File
    } else {
        NodeKind::Special
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn kind(&self, path: &Path) -> Option<NodeKind> {
        tokio::fs::metadata(path).await.ok().map(|m| kind_of(&m))
    }

    async fn list_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut children = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = dir.join(entry.file_name());
            // Follow symlinks so a link to a directory lists as a directory.
            let metadata = tokio::fs::metadata(&path).await?;
            children.push(ChildEntry {
                path,
                kind: kind_of(&metadata).listed_as(),
                len: metadata.len(),
            });
        }

        Ok(children)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, content).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }

    async fn remove_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_dir(path).await
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_dir_all(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::EntryKind;

    #[tokio::test]
    async fn test_kind_and_children() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("a.txt");
        tokio::fs::write(&file, "hello").await?;
        tokio::fs::create_dir(dir.path().join("sub")).await?;

        let fs = LocalFileSystem;
        assert_eq!(fs.kind(&file).await, Some(NodeKind::File));
        assert!(fs.is_dir(dir.path()).await);
        assert!(!fs.exists(&dir.path().join("missing")).await);

        let mut children = fs.list_children(dir.path()).await?;
        children.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].path, file);
        assert_eq!(children[0].len, 5);
        assert_eq!(children[1].kind, EntryKind::Directory);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_dir_requires_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let sub = dir.path().join("sub");
        tokio::fs::create_dir_all(sub.join("nested")).await?;

        let fs = LocalFileSystem;
        assert!(fs.remove_dir(&sub).await.is_err());
        fs.remove_dir_all(&sub).await?;
        assert!(!fs.exists(&sub).await);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_devices_are_special() {
        let fs = LocalFileSystem;
        assert_eq!(fs.kind(Path::new("/dev/null")).await, Some(NodeKind::Special));
        assert!(!fs.is_file(Path::new("/dev/null")).await);
        assert!(fs.exists(Path::new("/dev/null")).await);
    }
}
