//! Default template sources
//!
//! Implementations of the TemplateSource port.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError, FsResult, TemplateSource};
use crate::infrastructure::fs::LocalFs;

/// Template read from a file on disk
#[derive(Debug, Clone)]
pub struct FileTemplate<FS: FileSystem = LocalFs> {
    path: PathBuf,
    fs: FS,
}

impl FileTemplate<LocalFs> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }
}

impl<FS: FileSystem> FileTemplate<FS> {
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<FS: FileSystem> TemplateSource for FileTemplate<FS> {
    fn load(&self) -> FsResult<String> {
        self.fs.read(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Template compiled into the host binary (e.g. via `include_str!`)
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplate {
    name: &'static str,
    content: &'static str,
}

impl EmbeddedTemplate {
    pub const fn new(name: &'static str, content: &'static str) -> Self {
        Self { name, content }
    }
}

impl TemplateSource for EmbeddedTemplate {
    fn load(&self) -> FsResult<String> {
        if self.content.trim().is_empty() {
            return Err(FsError::Other(format!(
                "embedded template '{}' is empty",
                self.name
            )));
        }
        Ok(self.content.to_string())
    }

    fn describe(&self) -> String {
        format!("embedded:{}", self.name)
    }
}
