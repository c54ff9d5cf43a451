//! Conversion options and their defaults.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Delimiter;

/// Built-in defaults for every option.
pub mod defaults {
    pub const FILE_NAME: &str = "my-icons";
    pub const INTERFACE_NAME: &str = "MyIcon";
    pub const OUTPUT_DIRECTORY: &str = "./dist";
    pub const PREFIX: &str = "myIcon";
    pub const TYPE_NAME: &str = "myIcons";
    pub const SRC_FILES: &str = "*.svg";
}

/// How generated code is grouped into output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStrategy {
    /// Constants, type union and interface in a single file.
    #[default]
    SingleFile,
    /// One module per icon plus a shared model module and an index barrel.
    LazyLoading,
}

impl OutputStrategy {
    pub fn from_lazy_loading(lazy: bool) -> Self {
        if lazy {
            OutputStrategy::LazyLoading
        } else {
            OutputStrategy::SingleFile
        }
    }
}

/// Fully resolved configuration of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub delimiter: Delimiter,
    pub type_name: String,
    pub interface_name: String,
    pub prefix: String,
    pub file_name: String,
    /// Source directories or glob patterns, in the order they were given.
    pub src_files: Vec<String>,
    pub output_directory: PathBuf,
    pub strategy: OutputStrategy,
    /// Directory of the model module (lazy-loading only).
    pub model_output_path: Option<PathBuf>,
    /// Base name of the model module (lazy-loading only).
    pub model_file_name: Option<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        RawOptions::default().resolve()
    }
}

/// User supplied option values, each one optional.
///
/// Values come from command-line flags or a config file and are layered with
/// [`RawOptions::or`] before defaults are filled in by [`RawOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawOptions {
    pub delimiter: Option<Delimiter>,
    pub type_name: Option<String>,
    pub interface_name: Option<String>,
    pub prefix: Option<String>,
    pub file_name: Option<String>,
    #[serde(default)]
    pub src_files: Vec<String>,
    pub output_directory: Option<PathBuf>,
    pub optimize_for_lazy_loading: Option<bool>,
    pub model_output_path: Option<PathBuf>,
    pub model_file_name: Option<String>,
}

impl RawOptions {
    /// Append a source entry; repeated entries accumulate.
    pub fn src_file(mut self, src: impl Into<String>) -> Self {
        self.src_files.push(src.into());
        self
    }

    /// Fill every value missing in `self` from `fallback`.
    ///
    /// Source entries are taken from `fallback` only when `self` has none.
    pub fn or(self, fallback: RawOptions) -> Self {
        Self {
            delimiter: self.delimiter.or(fallback.delimiter),
            type_name: self.type_name.or(fallback.type_name),
            interface_name: self.interface_name.or(fallback.interface_name),
            prefix: self.prefix.or(fallback.prefix),
            file_name: self.file_name.or(fallback.file_name),
            src_files: if self.src_files.is_empty() {
                fallback.src_files
            } else {
                self.src_files
            },
            output_directory: self.output_directory.or(fallback.output_directory),
            optimize_for_lazy_loading: self
                .optimize_for_lazy_loading
                .or(fallback.optimize_for_lazy_loading),
            model_output_path: self.model_output_path.or(fallback.model_output_path),
            model_file_name: self.model_file_name.or(fallback.model_file_name),
        }
    }

    /// Substitute the built-in default for every missing value.
    pub fn resolve(self) -> ConversionOptions {
        let src_files = if self.src_files.is_empty() {
            vec![defaults::SRC_FILES.to_string()]
        } else {
            self.src_files
        };

        ConversionOptions {
            delimiter: self.delimiter.unwrap_or_default(),
            type_name: self
                .type_name
                .unwrap_or_else(|| defaults::TYPE_NAME.to_string()),
            interface_name: self
                .interface_name
                .unwrap_or_else(|| defaults::INTERFACE_NAME.to_string()),
            prefix: self.prefix.unwrap_or_else(|| defaults::PREFIX.to_string()),
            file_name: self
                .file_name
                .unwrap_or_else(|| defaults::FILE_NAME.to_string()),
            src_files,
            output_directory: self
                .output_directory
                .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIRECTORY)),
            strategy: OutputStrategy::from_lazy_loading(
                self.optimize_for_lazy_loading.unwrap_or(false),
            ),
            model_output_path: self.model_output_path,
            model_file_name: self.model_file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let options = RawOptions::default().resolve();

        assert_eq!(options.file_name, "my-icons");
        assert_eq!(options.delimiter, Delimiter::Snake);
        assert_eq!(options.interface_name, "MyIcon");
        assert_eq!(options.output_directory, PathBuf::from("./dist"));
        assert_eq!(options.prefix, "myIcon");
        assert_eq!(options.type_name, "myIcons");
        assert_eq!(options.src_files, vec!["*.svg"]);
        assert_eq!(options.strategy, OutputStrategy::SingleFile);
        assert_eq!(options.model_output_path, None);
        assert_eq!(options.model_file_name, None);
    }

    #[test]
    fn test_resolve_keeps_given_values() {
        let options = RawOptions {
            delimiter: Some(Delimiter::Kebab),
            prefix: Some("ic".to_string()),
            optimize_for_lazy_loading: Some(true),
            ..Default::default()
        }
        .resolve();

        assert_eq!(options.delimiter, Delimiter::Kebab);
        assert_eq!(options.prefix, "ic");
        assert_eq!(options.strategy, OutputStrategy::LazyLoading);
        // untouched fields still defaulted
        assert_eq!(options.type_name, "myIcons");
    }

    #[test]
    fn test_src_files_accumulate() {
        let options = RawOptions::default()
            .src_file("./icons/a")
            .src_file("./icons/b")
            .resolve();

        assert_eq!(options.src_files, vec!["./icons/a", "./icons/b"]);
    }

    #[test]
    fn test_or_prefers_self() {
        let cli = RawOptions {
            prefix: Some("cli".to_string()),
            ..Default::default()
        };
        let file = RawOptions {
            prefix: Some("file".to_string()),
            type_name: Some("FileIcons".to_string()),
            ..Default::default()
        }
        .src_file("./from-file");

        let merged = cli.or(file).resolve();

        assert_eq!(merged.prefix, "cli");
        assert_eq!(merged.type_name, "FileIcons");
        assert_eq!(merged.src_files, vec!["./from-file"]);
    }

    #[test]
    fn test_or_src_files_replace_not_merge() {
        let cli = RawOptions::default().src_file("./cli");
        let file = RawOptions::default().src_file("./file");

        assert_eq!(cli.or(file).src_files, vec!["./cli"]);
    }

    #[test]
    fn test_default_options() {
        assert_eq!(ConversionOptions::default(), RawOptions::default().resolve());
    }
}
