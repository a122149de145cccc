//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the target's directory which is then
/// renamed over the target, so a crash never leaves a half-written file.
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
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::at(path, e))?;

        // Keep the original file's permissions on the replacement
        if let Ok(meta) = std::fs::metadata(path) {
            if let Err(err) = std::fs::set_permissions(tmp.path(), meta.permissions()) {
                debug!(path = %path.display(), error = %err, "could not copy file permissions");
            }
        }

        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.yml");
        let fs = LocalFs::new();

        fs.write(&file, "a: 1\n").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "a: 1\n");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plugins").join("demo").join("config.yml");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_overwrite_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config.yml");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();

        assert_eq!(fs.read(&file).unwrap(), "new");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join("config.yml");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640)).unwrap();
        fs.write(&file, "new").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn local_fs_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.yml");
        let fs = LocalFs::new();

        assert!(!fs.exists(&file));
        fs.write(&file, "content").unwrap();
        assert!(fs.exists(&file));
    }

    #[test]
    fn local_fs_read_missing_reports_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.yml");
        let err = LocalFs::new().read(&file).unwrap_err();
        assert!(matches!(err, FsError::NotFound(ref p) if p == &file));
    }
}
