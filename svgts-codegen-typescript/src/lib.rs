//! TypeScript code generator for the svg-to-ts icon generator.
//!
//! # Usage
//!
//! This crate is used internally by the `svg-to-ts` binary.
//!
//! ```ignore
//! use svgts_codegen_typescript::Generator;
//! use svgts_options::ConversionOptions;
//!
//! let options = ConversionOptions::default();
//! let generator = Generator::new(&options);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate()?;
//! ```
//!
//! # Generated Output
//!
//! Single-file strategy:
//!
//! - `<output-directory>/<file-name>.ts` - icon constants, union type and interface
//!
//! Lazy-loading strategy:
//!
//! - `<output-directory>/<icon>.icon.ts` - one constant per module
//! - `<model-output-path>/<model-file-name>.ts` - union type and interface
//! - `<output-directory>/index.ts` - barrel re-exporting every module

mod assemble;
mod code_file;
mod format;
mod generator;
mod naming;

pub mod ast;
pub mod files;

pub use assemble::{IconRecord, icon_interface, icon_union};
pub use code_file::CodeFile;
pub use format::{Formatter, TypeScriptFormatter};
pub use generator::{GenerateResult, Generator};
pub use naming::IconNames;
