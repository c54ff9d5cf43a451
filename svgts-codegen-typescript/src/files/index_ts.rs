//! Lazy-loading output: the barrel re-exporting every module.

use std::path::PathBuf;

use svgts_core::GeneratedFile;

use crate::{ast::Export, code_file::CodeFile};

/// `<output-directory>/index.ts`
pub struct IndexTs {
    path: PathBuf,
    modules: Vec<String>,
}

impl IndexTs {
    /// `modules` are module specifiers relative to the barrel, in export order.
    pub fn new(path: impl Into<PathBuf>, modules: Vec<String>) -> Self {
        Self {
            path: path.into(),
            modules,
        }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .exports(self.modules.iter().map(|module| Export::all_from(module)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let file = IndexTs::new(
            "dist/index.ts",
            vec!["./ic-home.icon".to_string(), "./icons.model".to_string()],
        );

        assert_eq!(
            file.render(),
            "export * from './ic-home.icon';\nexport * from './icons.model';\n"
        );
    }
}
