//! # File Operations
//!
//! The four file-domain tools: list, read, write and delete.
//! Each call is independent; nothing is cached or locked between calls.

use serde::Serialize;
use std::path::Path;

use crate::domain::config::{DeletePolicy, FilesConfig, WritePolicy};
use crate::domain::error::ToolError;
use crate::domain::paths;
use crate::domain::traits::{FileSystem, NodeKind};
use crate::domain::types::{EntryKind, FileEntry};

pub struct FileOperations<F: FileSystem> {
    fs: F,
    policy: FilesConfig,
}

/// JSON with four-space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl<F: FileSystem> FileOperations<F> {
    pub fn new(fs: F, policy: FilesConfig) -> Self {
        Self { fs, policy }
    }

    /// Lists the immediate children of a directory.
    pub async fn list_entries(&self, raw: &str) -> Result<Vec<FileEntry>, ToolError> {
        let dir = paths::validate(&self.fs, raw).await?;
        if !self.fs.is_dir(&dir).await {
            return Err(ToolError::WrongKind {
                path: raw.to_string(),
                expected: EntryKind::Directory,
            });
        }

        let mut children = self
            .fs
            .list_children(&dir)
            .await
            .map_err(|e| ToolError::os("list", display(&dir), e))?;
        children.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(children
            .into_iter()
            .map(|child| match child.kind {
                EntryKind::Directory => FileEntry::directory(display(&child.path)),
                EntryKind::File => FileEntry::file(display(&child.path), child.len),
            })
            .collect())
    }

    /// `list_files`: the listing as pretty-printed JSON.
    pub async fn list_files(&self, raw: &str) -> Result<String, ToolError> {
        let entries = self.list_entries(raw).await?;
        to_pretty_json(&entries).map_err(|e| ToolError::os("encode listing of", raw, e.into()))
    }

    /// `read_file`: the whole file as text.
    pub async fn read_file(&self, raw: &str) -> Result<String, ToolError> {
        let path = paths::validate(&self.fs, raw).await?;
        if !self.fs.is_file(&path).await {
            return Err(ToolError::WrongKind {
                path: raw.to_string(),
                expected: EntryKind::File,
            });
        }

        self.fs
            .read_to_string(&path)
            .await
            .map_err(|e| ToolError::os("read", display(&path), e))
    }

    /// `write_file`: truncates or creates the file, creating missing parents.
    pub async fn write_file(&self, raw: &str, content: &str) -> Result<String, ToolError> {
        let path = match self.policy.write {
            WritePolicy::Create => paths::require_absolute(raw)?,
            WritePolicy::RequireExisting => paths::validate(&self.fs, raw).await?,
        };

        // Only regular files are overwritten.
        match self.fs.kind(&path).await {
            Some(NodeKind::File) | None => {}
            Some(NodeKind::Directory | NodeKind::Special) => {
                return Err(ToolError::WrongKind {
                    path: raw.to_string(),
                    expected: EntryKind::File,
                });
            }
        }

        if let Some(parent) = path.parent() {
            if !self.fs.is_dir(parent).await {
                self.fs
                    .create_dir_all(parent)
                    .await
                    .map_err(|e| ToolError::os("create directory", display(parent), e))?;
            }
        }

        self.fs
            .write_all(&path, content.as_bytes())
            .await
            .map_err(|e| ToolError::os("write to", display(&path), e))?;

        Ok(format!("Successfully wrote to {}", path.display()))
    }

    /// `delete_file`: removes a file, or a directory according to the delete policy.
    pub async fn delete_file(&self, raw: &str) -> Result<String, ToolError> {
        let path = paths::validate(&self.fs, raw).await?;

        if self.fs.is_dir(&path).await {
            let removed = match self.policy.delete {
                DeletePolicy::Recursive => self.fs.remove_dir_all(&path).await,
                DeletePolicy::EmptyOnly => self.fs.remove_dir(&path).await,
            };
            removed.map_err(|e| ToolError::os("delete directory", display(&path), e))?;
            Ok(format!("Successfully deleted directory: {}", path.display()))
        } else {
            self.fs
                .remove_file(&path)
                .await
                .map_err(|e| ToolError::os("delete file", display(&path), e))?;
            Ok(format!("Successfully deleted file: {}", path.display()))
        }
    }
}
