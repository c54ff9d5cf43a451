//! Single-file output: every constant, the union and the interface.

use std::path::PathBuf;

use svgts_core::GeneratedFile;

use crate::{
    assemble::{IconRecord, icon_interface, icon_union},
    code_file::CodeFile,
};

/// `<output-directory>/<file-name>.ts`
pub struct IconsTs<'a> {
    path: PathBuf,
    icons: &'a [IconRecord],
    type_name: &'a str,
    interface_name: &'a str,
}

impl<'a> IconsTs<'a> {
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

impl GeneratedFile for IconsTs<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add_all(self.icons.iter().map(|icon| icon.constant(self.interface_name)))
            .add(icon_union(self.type_name, self.icons))
            .add(icon_interface(self.interface_name, self.type_name))
            .render()
    }
}
