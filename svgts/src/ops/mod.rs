//! Core operations.
//!
//! Business logic for svg-to-ts, separated from CLI argument parsing and
//! output rendering.

pub mod convert;

pub use convert::convert;
