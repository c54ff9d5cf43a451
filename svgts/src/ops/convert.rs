//! Convert operation - SVG icons to TypeScript.

use svgts_codegen_typescript::Generator;
use svgts_core::Result;
use svgts_options::ConversionOptions;

use crate::reports::{ConvertReport, PreviewFile, PreviewResult, WrittenResult};

/// Execute the convert operation.
///
/// Never fails: an error anywhere in the batch becomes a failure report and
/// nothing is written.
pub fn convert(options: &ConversionOptions, dry_run: bool) -> ConvertReport {
    let generator = Generator::new(options);
    let result = if dry_run {
        preview(&generator)
    } else {
        write(&generator, options)
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "conversion failed");
        ConvertReport::failed(e)
    })
}

fn preview(generator: &Generator<'_>) -> Result<ConvertReport> {
    let files = generator
        .preview()?
        .into_iter()
        .map(|file| PreviewFile {
            path: file.path().display().to_string(),
            content: file.content().to_string(),
        })
        .collect();

    Ok(ConvertReport::Preview(PreviewResult { files }))
}

fn write(generator: &Generator<'_>, options: &ConversionOptions) -> Result<ConvertReport> {
    let result = generator.generate()?;
    tracing::info!(
        icons = result.icons.len(),
        files = result.files.len(),
        "icons converted"
    );

    Ok(ConvertReport::Written(WrittenResult {
        output_dir: options.output_directory.clone(),
        icons: result.icons,
        files: result.files,
    }))
}
