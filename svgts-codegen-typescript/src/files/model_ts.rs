//! Lazy-loading output: the shared union type and interface.

use std::path::PathBuf;

use svgts_core::GeneratedFile;

use crate::{
    assemble::{IconRecord, icon_interface, icon_union},
    code_file::CodeFile,
};

/// `<model-output-path>/<model-file-name>.ts`
pub struct ModelTs<'a> {
    path: PathBuf,
    icons: &'a [IconRecord],
    type_name: &'a str,
    interface_name: &'a str,
}

impl<'a> ModelTs<'a> {
    pub fn new(
        path: impl Into<PathBuf>,
        icons: &'a [IconRecord],
        type_name: &'a str,
        interface_name: &'a str,
    ) -> Self {
        Self {
            path: path.into(),
            icons,
            type_name,
            interface_name,
        }
    }
}

impl GeneratedFile for ModelTs<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(icon_union(self.type_name, self.icons))
            .add(icon_interface(self.interface_name, self.type_name))
            .render()
    }
}
