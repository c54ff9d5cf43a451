//! TypeScript interface builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A required field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("{}: {};", self.name, self.ty)
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))]
        } else {
            vec![CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self
                    .fields
                    .iter()
                    .map(|field| CodeFragment::Line(field.render()))
                    .collect(),
                close: Some("}".to_string()),
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Icon")
            .field("name", "Icons")
            .field("data", "string")
            .build();
        assert_eq!(
            i,
            "export interface Icon {\n  name: Icons;\n  data: string;\n}\n"
        );
    }
}
