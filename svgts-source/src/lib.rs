//! Source side of the svg-to-ts pipeline.
//!
//! [`SourceSet::collect`] finds the icon files, [`extract_svg_content`] reads
//! one of them and an [`SvgOptimizer`] cleans up its markup.

mod collect;
mod extract;
mod optimize;

pub use collect::{SourceFile, SourceSet, is_glob_pattern};
pub use extract::{collapse_line_breaks, extract_svg_content};
pub use optimize::{BoxError, SvgOptimizer, SvgMinifier};
