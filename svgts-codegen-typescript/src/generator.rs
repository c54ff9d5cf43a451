//! TypeScript icon generator.

use std::path::{Path, PathBuf};

use svgts_codegen::paths::{module_specifier, typescript};
use svgts_core::{Error, File, GeneratedFile, Result};
use svgts_options::{ConversionOptions, OutputStrategy};
use svgts_source::{SourceFile, SourceSet, SvgMinifier, SvgOptimizer, extract_svg_content};

use crate::{
    assemble::IconRecord,
    files::{IconModuleTs, IconsTs, IndexTs, ModelTs},
    format::{Formatter, TypeScriptFormatter},
    naming::IconNames,
};

/// Result of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Variable names of the converted icons, in output order
    pub icons: Vec<String>,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Converts a set of SVG sources into TypeScript files.
pub struct Generator<'a> {
    options: &'a ConversionOptions,
    optimizer: Box<dyn SvgOptimizer + 'a>,
    formatter: Box<dyn Formatter + 'a>,
}

impl<'a> Generator<'a> {
    /// Create a generator using `quick-xml` and `oxc`.
    pub fn new(options: &'a ConversionOptions) -> Self {
        Self {
            options,
            optimizer: Box::new(SvgMinifier),
            formatter: Box::new(TypeScriptFormatter),
        }
    }

    /// Replace the SVG optimizer.
    pub fn with_optimizer(mut self, optimizer: impl SvgOptimizer + 'a) -> Self {
        self.optimizer = Box::new(optimizer);
        self
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'a) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Read, optimize and name every source file, in processing order.
    ///
    /// The first failing file aborts the whole batch.
    pub fn collect_icons(&self) -> Result<Vec<IconRecord>> {
        let sources = SourceSet::collect(&self.options.src_files)?;
        tracing::debug!(
            scanned = sources.scanned(),
            files = sources.files().count(),
            "collected sources"
        );
        sources.files().map(|file| self.convert(file)).collect()
    }

    fn convert(&self, file: &SourceFile) -> Result<IconRecord> {
        let raw = extract_svg_content(&file.path())?;
        let svg = self.optimizer.optimize(&raw).map_err(|source| {
            Box::new(Error::Optimize {
                file: file.file_name().to_string(),
                source,
            })
        })?;
        let names = IconNames::derive(
            file.base_name(),
            &self.options.prefix,
            self.options.delimiter,
        );
        tracing::debug!(
            file = %file.path().display(),
            variable = %names.variable,
            "converted icon"
        );
        Ok(IconRecord::new(file.file_name(), names, svg))
    }

    /// Render and format every output file without writing anything.
    pub fn preview(&self) -> Result<Vec<File>> {
        let icons = self.collect_icons()?;
        self.render(&icons)
    }

    /// Render and format the output files for already converted icons.
    pub fn render(&self, icons: &[IconRecord]) -> Result<Vec<File>> {
        if icons.is_empty() {
            return Err(Box::new(Error::NoIcons {
                sources: self.options.src_files.join(", "),
            }));
        }

        let units = match self.options.strategy {
            OutputStrategy::SingleFile => self.single_file(icons),
            OutputStrategy::LazyLoading => self.lazy_loading(icons),
        };

        units.iter().map(|unit| self.format_unit(unit.as_ref())).collect()
    }

    fn format_unit(&self, unit: &dyn GeneratedFile) -> Result<File> {
        let path = unit.path();
        let content = self
            .formatter
            .format(&path.display().to_string(), &unit.render())?;
        Ok(File::new(path, content))
    }

    /// Generate and write all files.
    ///
    /// Every file is rendered and formatted before the first one is written.
    pub fn generate(&self) -> Result<GenerateResult> {
        let icons = self.collect_icons()?;
        let files = self.render(&icons)?;

        for file in &files {
            file.write()?;
        }

        Ok(GenerateResult {
            icons: icons
                .iter()
                .map(|icon| icon.names().variable.clone())
                .collect(),
            files: files.iter().map(|file| file.path().to_path_buf()).collect(),
        })
    }

    fn output_path(&self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{}.{}", stem, typescript::FILE_EXTENSION))
    }

    fn single_file<'b>(&'b self, icons: &'b [IconRecord]) -> Vec<Box<dyn GeneratedFile + 'b>> {
        let path = self.output_path(&self.options.output_directory, &self.options.file_name);
        let unit: Box<dyn GeneratedFile + 'b> = Box::new(IconsTs::new(
            path,
            icons,
            &self.options.type_name,
            &self.options.interface_name,
        ));
        vec![unit]
    }

    fn lazy_loading<'b>(&'b self, icons: &'b [IconRecord]) -> Vec<Box<dyn GeneratedFile + 'b>> {
        let out_dir = &self.options.output_directory;
        let model_dir = self.options.model_output_path.as_deref().unwrap_or(out_dir);
        let model_stem = self.options.model_file_name.clone().unwrap_or_else(|| {
            format!("{}{}", self.options.file_name, typescript::MODEL_SUFFIX)
        });
        let model_path = self.output_path(model_dir, &model_stem);
        let model_import = module_specifier(out_dir, &model_path);

        let mut units: Vec<Box<dyn GeneratedFile + 'b>> = Vec::with_capacity(icons.len() + 2);
        let mut modules = Vec::with_capacity(icons.len() + 1);

        for icon in icons {
            let path = self.output_path(out_dir, &icon.names().module_stem());
            modules.push(module_specifier(out_dir, &path));
            units.push(Box::new(IconModuleTs::new(
                path,
                icon,
                &self.options.interface_name,
                model_import.clone(),
            )));
        }

        modules.push(model_import);
        units.push(Box::new(ModelTs::new(
            model_path,
            icons,
            &self.options.type_name,
            &self.options.interface_name,
        )));
        units.push(Box::new(IndexTs::new(
            out_dir.join(typescript::INDEX_FILE),
            modules,
        )));

        units
    }
}
