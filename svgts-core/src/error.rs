use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for conversion operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Everything that can stop a conversion run.
///
/// None of these are recovered per file: the first error aborts the run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read source directory '{path}'")]
    #[diagnostic(
        code(svg_to_ts::read_dir),
        help("every --src-files entry must be an existing directory or a glob pattern")
    )]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid source pattern '{pattern}': {message}")]
    #[diagnostic(code(svg_to_ts::invalid_pattern))]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(svg_to_ts::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to optimize '{file}'")]
    #[diagnostic(
        code(svg_to_ts::optimize),
        help("make sure every file in the source directories is a valid SVG document")
    )]
    Optimize {
        file: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to format generated file '{file}': {message}")]
    #[diagnostic(
        code(svg_to_ts::format),
        help("check that the prefix, type name and interface name are valid TypeScript identifiers")
    )]
    Format { file: String, message: String },

    #[error("failed to create directory '{path}'")]
    #[diagnostic(
        code(svg_to_ts::create_dir),
        help("only the last path segment is created; make sure its parent exists")
    )]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(svg_to_ts::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no icons found in {sources}")]
    #[diagnostic(code(svg_to_ts::no_icons))]
    NoIcons { sources: String },
}
