//! Shared code generation utilities for the svg-to-ts icon generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`paths`] - File naming constants and import path resolution

pub mod builder;
pub mod paths;
