//! File naming constants and import path resolution for generated files.

use std::path::{Component, Path, PathBuf};

/// TypeScript-specific paths and constants.
pub mod typescript {
    /// File extension for TypeScript source files.
    pub const FILE_EXTENSION: &str = "ts";

    /// Barrel file name.
    pub const INDEX_FILE: &str = "index.ts";

    /// Suffix appended to the stem of each per-icon module.
    pub const ICON_MODULE_SUFFIX: &str = ".icon";

    /// Suffix appended to the output file name to form the model module name.
    pub const MODEL_SUFFIX: &str = ".model";
}

/// Build the ES module specifier that imports `target` from a file in `from_dir`.
///
/// The specifier uses forward slashes, always starts with `./` or `../` and
/// drops the `.ts` extension of the target. Relative inputs are resolved
/// against the current directory first, so `./dist`, `dist` and an absolute
/// spelling of the same directory give the same result.
pub fn module_specifier(from_dir: &Path, target: &Path) -> String {
    let from_dir = normalize(from_dir);
    let target = normalize(target);
    let relative = pathdiff::diff_paths(&target, &from_dir).unwrap_or(target);

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::ParentDir => Some("..".to_string()),
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(last) = segments.last_mut()
        && let Some(stem) = last.strip_suffix(&format!(".{}", typescript::FILE_EXTENSION))
    {
        *last = stem.to_string();
    }

    let joined = segments.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}

/// Make `path` absolute and fold away `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
