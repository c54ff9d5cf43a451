//! TypeScript union type builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for exported TypeScript union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Add every variant of an iterator, in order.
    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // Joined once, so there is never a dangling separator.
        vec![CodeFragment::Line(format!(
            "export type {} = {};",
            self.name,
            self.variants.join(" | ")
        ))]
    }
}
