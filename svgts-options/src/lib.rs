//! Conversion options for the svg-to-ts icon generator.
//!
//! Raw option values come from command-line flags and an optional
//! `svg-to-ts.toml` file; [`RawOptions::resolve`] turns them into the
//! immutable [`ConversionOptions`] consumed by the rest of the pipeline.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod delimiter;
mod error;
mod file;
mod options;

pub use delimiter::Delimiter;
pub use error::{Error, Result};
pub use file::{ConfigFile, parse_options};
pub use options::{ConversionOptions, OutputStrategy, RawOptions, defaults};
