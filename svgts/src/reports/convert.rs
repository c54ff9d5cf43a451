//! Convert command report data structures.

use std::path::PathBuf;

use miette::Diagnostic;

use super::output::{Output, Report};

/// Outcome of a conversion run.
#[derive(Debug)]
pub enum ConvertReport {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
    /// The run failed before anything was written.
    Failed(FailedResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Variable names of the converted icons.
    pub icons: Vec<String>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Result of a failed run.
#[derive(Debug)]
pub struct FailedResult {
    /// Rendered diagnostic, including the cause chain.
    pub details: String,
}

impl ConvertReport {
    /// Build a failure report from any diagnostic error.
    pub fn failed<E>(error: Box<E>) -> Self
    where
        E: Diagnostic + Send + Sync + 'static,
    {
        ConvertReport::Failed(FailedResult {
            details: format!("{:?}", miette::Report::new(*error)),
        })
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            ConvertReport::Written(written) => render_written(out, written),
            ConvertReport::Preview(preview) => render_preview(out, preview),
            ConvertReport::Failed(failed) => render_failed(out, failed),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    out.success(
        "Icons file successfully generated under",
        &written.output_dir.display().to_string(),
    );
    for file in &written.files {
        out.added_item(&file.display().to_string());
    }
    out.preformatted(&format!("{} icons converted", written.icons.len()));
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    for file in &preview.files {
        out.divider(&file.path);
        out.preformatted(&file.content);
        out.newline();
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", preview.files.len()));
}

fn render_failed(out: &mut dyn Output, failed: &FailedResult) {
    out.failure("Something went wrong");
    out.preformatted(&failed.details);
}
