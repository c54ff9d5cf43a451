//! Lazy-loading output: one module per icon.

use std::path::PathBuf;

use svgts_core::GeneratedFile;

use crate::{assemble::IconRecord, ast::Import, code_file::CodeFile};

/// `<output-directory>/<kebab(variable)>.icon.ts`
pub struct IconModuleTs<'a> {
    path: PathBuf,
    icon: &'a IconRecord,
    interface_name: &'a str,
    model_import: String,
}

impl<'a> IconModuleTs<'a> {
    /// `model_import` is the module specifier of the model module, relative to this file.
    pub fn new(
        path: impl Into<PathBuf>,
        icon: &'a IconRecord,
        interface_name: &'a str,
        model_import: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            icon,
            interface_name,
            model_import: model_import.into(),
        }
    }
}

impl GeneratedFile for IconModuleTs<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(&self.model_import).named(self.interface_name))
            .add(self.icon.constant(self.interface_name))
            .render()
    }
}
