//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Read a file to string, attaching the path to any error.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Lexically normalize a path: resolve `.` and `..` components and collapse
/// duplicate or trailing separators, without touching the filesystem.
///
/// Target paths are computed before anything exists on disk, so this cannot
/// use `canonicalize`. A `..` at the start of the path (or one that would
/// climb past a relative path's first component) is kept as-is.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else {
                    out.push(Component::ParentDir.as_os_str());
                }
            }
            part => out.push(part.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_to_string_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("nope.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }

    #[test]
    fn test_normalize_parent_components() {
        assert_eq!(normalize(Path::new("/proj/build/..")), PathBuf::from("/proj"));
        assert_eq!(normalize(Path::new("/proj/./src")), PathBuf::from("/proj/src"));
    }

    #[test]
    fn test_normalize_trailing_and_doubled_separators() {
        assert_eq!(normalize(Path::new("/proj/src/")), PathBuf::from("/proj/src"));
        assert_eq!(normalize(Path::new("/proj//src")), PathBuf::from("/proj/src"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent() {
        assert_eq!(normalize(Path::new("../proj")), PathBuf::from("../proj"));
        assert_eq!(normalize(Path::new("build/..")), PathBuf::from(""));
    }
}
