use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the path the file is written to
    fn path(&self) -> PathBuf;

    /// Render the file content, before formatting
    fn render(&self) -> String;
}

/// Create `dir` if it does not exist yet.
///
/// Only the last path segment is created; a missing parent is an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    std::fs::create_dir(dir).map_err(|source| {
        Box::new(Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    })
}

/// A file to be written, with its final content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating its directory and overwriting any existing file
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::write(&self.path, &self.content).map_err(|source| {
            Box::new(Error::Write {
                path: self.path.clone(),
                source,
            })
        })?;
        tracing::debug!(path = %self.path.display(), "wrote file");
        Ok(())
    }
}
