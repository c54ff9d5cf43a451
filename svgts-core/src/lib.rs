//! Core utilities and types for the svg-to-ts icon generator.
//!
//! This crate provides the casing rules, the file writer and the error
//! taxonomy shared by every other crate of the workspace.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{File, GeneratedFile, ensure_dir};
// String utilities
pub use utils::{capitalize, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
