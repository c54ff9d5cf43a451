//! TypeScript const declaration builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for exported TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        let head = format!("export const {}{} = ", self.name, type_annotation);

        // Multi-line values keep their own layout; the terminator goes on the last line.
        let mut lines: Vec<&str> = self.value.lines().collect();
        match lines.len() {
            0 => vec![CodeFragment::Line(format!("{head};"))],
            1 => vec![CodeFragment::Line(format!("{head}{};", lines[0]))],
            _ => {
                let last = lines.pop().unwrap_or_default();
                let mut fragments = Vec::with_capacity(lines.len() + 1);
                let mut rest = lines.into_iter();
                fragments.push(CodeFragment::Line(format!(
                    "{head}{}",
                    rest.next().unwrap_or_default()
                )));
                fragments.extend(rest.map(CodeFragment::line));
                fragments.push(CodeFragment::Line(format!("{last};")));
                fragments
            }
        }
    }
}
