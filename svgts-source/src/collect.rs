//! Source file collection.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use svgts_core::{Error, Result};

/// Returns true if a source entry should be expanded as a glob pattern.
pub fn is_glob_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

/// A file name together with the directory it was last seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    file_name: String,
    directory: PathBuf,
    is_file: bool,
}

impl SourceFile {
    /// Get the file name, extension included
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the directory the file is read from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the full path of the file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Get the file name up to its first dot.
    ///
    /// `icon.v2.svg` gives `icon`.
    pub fn base_name(&self) -> &str {
        self.file_name
            .split('.')
            .next()
            .unwrap_or(&self.file_name)
    }

    /// Returns true for regular files; directories and symlinks are skipped.
    pub fn is_file(&self) -> bool {
        self.is_file
    }
}

/// Every entry found in the configured sources.
///
/// Entries are keyed by file name. When two sources list the same name the
/// entry keeps the position of its first appearance and the directory of its
/// last one.
#[derive(Debug, Default)]
pub struct SourceSet {
    entries: IndexMap<String, SourceFile>,
    scanned: usize,
}

impl SourceSet {
    /// Collect the entries of every source, in order.
    ///
    /// A source is either a directory, listed non-recursively and sorted by
    /// name, or a glob pattern.
    pub fn collect<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        let mut set = Self::default();
        for source in sources {
            let source = source.as_ref();
            if is_glob_pattern(source) {
                set.add_pattern(source)?;
            } else {
                set.add_directory(Path::new(source))?;
            }
        }
        tracing::debug!(
            scanned = set.scanned,
            unique = set.entries.len(),
            "collected source entries"
        );
        Ok(set)
    }

    fn add_directory(&mut self, dir: &Path) -> Result<()> {
        let read_dir_error = |source| {
            Box::new(Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        };

        let mut listed = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let file_type = entry.file_type().map_err(read_dir_error)?;
            listed.push((
                entry.file_name().to_string_lossy().into_owned(),
                file_type.is_file(),
            ));
        }
        listed.sort();

        for (file_name, is_file) in listed {
            self.insert(file_name, dir.to_path_buf(), is_file);
        }
        Ok(())
    }

    fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let paths = glob::glob(pattern).map_err(|e| {
            Box::new(Error::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.msg.to_string(),
            })
        })?;

        for path in paths {
            let path = path.map_err(|e| {
                Box::new(Error::ReadDir {
                    path: e.path().to_path_buf(),
                    source: e.into(),
                })
            })?;
            let Some(file_name) = path.file_name() else {
                continue;
            };
            let file_name = file_name.to_string_lossy().into_owned();
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let is_file = fs::symlink_metadata(&path)
                .map(|meta| meta.file_type().is_file())
                .map_err(|source| Box::new(Error::ReadFile { path, source }))?;

            self.insert(file_name, directory, is_file);
        }
        Ok(())
    }

    fn insert(&mut self, file_name: String, directory: PathBuf, is_file: bool) {
        self.scanned += 1;
        if let Some(previous) = self.entries.get(&file_name) {
            tracing::debug!(
                file = %file_name,
                from = %previous.directory.display(),
                to = %directory.display(),
                "file name seen again, using later source"
            );
        }
        self.entries.insert(
            file_name.clone(),
            SourceFile {
                file_name,
                directory,
                is_file,
            },
        );
    }

    /// Iterate over the regular files to convert, in processing order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.entries.values().filter(|file| file.is_file())
    }

    /// Total number of entries listed across all sources, duplicates included.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}
