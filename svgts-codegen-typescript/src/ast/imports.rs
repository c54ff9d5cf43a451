//! TypeScript import builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::string_literal;

/// Builder for named TypeScript imports.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "import {{ {} }} from {};",
            self.named.join(", "),
            string_literal(&self.from)
        ))]
    }
}
