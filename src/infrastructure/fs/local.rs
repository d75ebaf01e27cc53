//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory, which is
/// then renamed over the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(path, e))?;
        tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ContentHash;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("agent_api.md");
        let fs = LocalFs::new();

        fs.write(&file, "# Domain: api\n").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "# Domain: api\n");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("docs").join("agents").join("agent_api.md");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("agent_api.md");
        let fs = LocalFs::new();

        std::fs::write(&file, "Original").unwrap();
        fs.write(&file, "Replaced").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "Replaced");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn local_fs_read_missing_reports_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.md");
        let err = LocalFs::new().read(&file).unwrap_err();
        assert!(matches!(err, FsError::NotFound(p) if p == file));
    }

    #[test]
    fn local_fs_hash_matches_content_hash() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hash.md");
        let fs = LocalFs::new();

        fs.write(&file, "hello").unwrap();

        assert_eq!(fs.hash(&file).unwrap(), ContentHash::from_content("hello"));
    }
}
