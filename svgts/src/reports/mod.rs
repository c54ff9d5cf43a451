//! Report data structures for commands.
//!
//! Operations build reports, then render them to an [`output::Output`] target.

mod convert;
mod output;

pub use convert::{ConvertReport, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
