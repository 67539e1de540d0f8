//! In-memory [`FileSystem`] for exercising the file tools without a disk.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::traits::{ChildEntry, FileSystem, NodeKind};
use crate::domain::types::EntryKind;

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
    /// Stands in for a device or FIFO.
    Special,
}

/// Absolute paths only; the root directory always exists.
#[derive(Debug)]
pub struct MemoryFileSystem {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self {
            nodes: Mutex::new(nodes),
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("No such file or directory: {}", path.display()),
    )
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating its ancestors.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        {
            let mut nodes = self.lock();
            let path = PathBuf::from(path);
            for ancestor in path.ancestors().skip(1) {
                nodes.insert(ancestor.to_path_buf(), Node::Dir);
            }
            nodes.insert(path, Node::File(content.as_bytes().to_vec()));
        }
        self
    }

    /// Seeds a directory, creating its ancestors.
    pub fn with_dir(self, path: &str) -> Self {
        {
            let mut nodes = self.lock();
            for ancestor in Path::new(path).ancestors() {
                nodes.insert(ancestor.to_path_buf(), Node::Dir);
            }
        }
        self
    }

    /// Seeds a special file, creating its ancestors.
    pub fn with_special(self, path: &str) -> Self {
        {
            let mut nodes = self.lock();
            let path = PathBuf::from(path);
            for ancestor in path.ancestors().skip(1) {
                nodes.insert(ancestor.to_path_buf(), Node::Dir);
            }
            nodes.insert(path, Node::Special);
        }
        self
    }

    pub fn node_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        // A panicking test may poison the lock; the map itself stays consistent.
        self.nodes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn kind(&self, path: &Path) -> Option<NodeKind> {
        self.lock().get(path).map(|node| match node {
            Node::File(_) => NodeKind::File,
            Node::Dir => NodeKind::Directory,
            Node::Special => NodeKind::Special,
        })
    }

    async fn list_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let nodes = self.lock();
        match nodes.get(dir) {
            Some(Node::Dir) => {}
            Some(_) => {
                return Err(io::Error::new(io::ErrorKind::Other, "Not a directory"));
            }
            None => return Err(not_found(dir)),
        }

        Ok(nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .map(|(path, node)| match node {
                Node::File(data) => ChildEntry {
                    path: path.clone(),
                    kind: EntryKind::File,
                    len: data.len() as u64,
                },
                Node::Dir => ChildEntry {
                    path: path.clone(),
                    kind: EntryKind::Directory,
                    len: 0,
                },
                Node::Special => ChildEntry {
                    path: path.clone(),
                    kind: EntryKind::File,
                    len: 0,
                },
            })
            .collect())
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.lock().get(path) {
            Some(Node::File(data)) => String::from_utf8(data.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(Node::Dir) => Err(io::Error::new(io::ErrorKind::Other, "Is a directory")),
            Some(Node::Special) => Err(io::Error::new(io::ErrorKind::WouldBlock, "No data")),
            None => Err(not_found(path)),
        }
    }

    async fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut nodes = self.lock();
        let parent = path.parent().ok_or_else(|| not_found(path))?;
        if !matches!(nodes.get(parent), Some(Node::Dir)) {
            return Err(not_found(parent));
        }
        match nodes.get(path) {
            Some(Node::Dir) => {
                return Err(io::Error::new(io::ErrorKind::Other, "Is a directory"));
            }
            Some(Node::Special) => {
                return Err(io::Error::new(io::ErrorKind::WouldBlock, "No reader"));
            }
            _ => {}
        }
        nodes.insert(path.to_path_buf(), Node::File(content.to_vec()));
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.lock();
        for ancestor in path.ancestors() {
            match nodes.get(ancestor) {
                Some(Node::File(_) | Node::Special) => {
                    return Err(io::Error::new(io::ErrorKind::AlreadyExists, "File exists"));
                }
                Some(Node::Dir) => {}
                None => {
                    nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.lock();
        match nodes.get(path) {
            Some(Node::File(_) | Node::Special) => {
                nodes.remove(path);
                Ok(())
            }
            Some(Node::Dir) => Err(io::Error::new(io::ErrorKind::Other, "Is a directory")),
            None => Err(not_found(path)),
        }
    }

    async fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.lock();
        if !matches!(nodes.get(path), Some(Node::Dir)) {
            return Err(not_found(path));
        }
        if nodes.keys().any(|p| p.parent() == Some(path)) {
            return Err(io::Error::new(io::ErrorKind::Other, "Directory not empty"));
        }
        nodes.remove(path);
        Ok(())
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.lock();
        if !matches!(nodes.get(path), Some(Node::Dir)) {
            return Err(not_found(path));
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
