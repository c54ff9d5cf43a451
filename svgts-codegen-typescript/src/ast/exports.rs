//! TypeScript re-export builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::string_literal;

/// `export * from '<module>';`
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    /// Re-export everything from another module.
    pub fn all_from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "export * from {};",
            string_literal(&self.from)
        ))]
    }
}
