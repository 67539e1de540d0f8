//! # Path Validation
//!
//! Gate for every file-domain operation. Paths are normalized lexically and must be
//! absolute; existence is checked against the injected [`FileSystem`].
//!
//! There is no containment check: any absolute path on the host is reachable.

use crate::domain::error::ToolError;
use crate::domain::traits::FileSystem;
use std::path::{Component, Path, PathBuf};

/// Collapses `.`, `..` and repeated separators without touching the filesystem.
///
/// `..` never climbs above the root of an absolute path. For relative paths leading
/// `..` components are kept. An empty result becomes `.`.
pub fn normalize(path: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    let mut absolute = false;
    let mut leading_parents = 0usize;

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(p) => prefix.push(p.as_os_str()),
            Component::RootDir => {
                absolute = true;
                prefix.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() && !absolute {
                    leading_parents += 1;
                }
            }
            Component::Normal(name) => parts.push(name),
        }
    }

    let mut normalized = prefix;
    for _ in 0..leading_parents {
        normalized.push("..");
    }
    for part in parts {
        normalized.push(part);
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Normalizes `raw` and requires the result to be absolute.
///
/// Errors embed the path as received.
pub fn require_absolute(raw: &str) -> Result<PathBuf, ToolError> {
    let normalized = normalize(raw);
    if !normalized.is_absolute() {
        return Err(ToolError::InvalidPath(raw.to_string()));
    }
    Ok(normalized)
}

/// Full validation: normalized, absolute and existing.
pub async fn validate<F>(fs: &F, raw: &str) -> Result<PathBuf, ToolError>
where
    F: FileSystem + ?Sized,
{
    let path = require_absolute(raw)?;
    if !fs.exists(&path).await {
        return Err(ToolError::NotFound(raw.to_string()));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFileSystem;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/a//b/./c/"), PathBuf::from("/a/b/c"));
        assert_eq!(normalize("/a/b/../c"), PathBuf::from("/a/c"));
        assert_eq!(normalize("/../../etc"), PathBuf::from("/etc"));
        assert_eq!(normalize("/"), PathBuf::from("/"));
        assert_eq!(normalize("a/../../b"), PathBuf::from("../b"));
        assert_eq!(normalize("./"), PathBuf::from("."));
        assert_eq!(normalize(""), PathBuf::from("."));
    }

    #[test]
    fn test_require_absolute() {
        assert_eq!(require_absolute("/tmp/../var").unwrap(), PathBuf::from("/var"));

        match require_absolute("relative/file.txt") {
            Err(ToolError::InvalidPath(p)) => assert_eq!(p, "relative/file.txt"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(require_absolute(""), Err(ToolError::InvalidPath(_))));
        assert!(matches!(require_absolute("./x"), Err(ToolError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn test_validate_existence() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFileSystem;

        let existing = format!("{}/./", dir.path().display());
        assert_eq!(validate(&fs, &existing).await.unwrap(), dir.path());

        let missing = format!("{}/missing", dir.path().display());
        match validate(&fs, &missing).await {
            Err(ToolError::NotFound(p)) => assert_eq!(p, missing),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
