//! Building blocks shared by every output strategy.

use crate::{
    ast::{Const, Interface, JsObject, Union},
    naming::IconNames,
};

/// One converted icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    file_name: String,
    names: IconNames,
    svg: String,
}

impl IconRecord {
    pub fn new(file_name: impl Into<String>, names: IconNames, svg: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            names,
            svg: svg.into(),
        }
    }

    /// Get the source file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the derived names
    pub fn names(&self) -> &IconNames {
        &self.names
    }

    /// Get the optimized SVG markup
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// The exported constant holding this icon.
    ///
    /// `export const <variable>: <interface> = { name: '<key>', data: '<svg>' };`
    pub fn constant(&self, interface_name: &str) -> Const {
        let value = JsObject::new()
            .string("name", &self.names.property_key)
            .string("data", &self.svg);
        Const::new(&self.names.variable, value.build()).ty(interface_name)
    }
}

/// The union of every icon's type literal, in processing order.
pub fn icon_union(type_name: &str, icons: &[IconRecord]) -> Union {
    Union::new(type_name).variants(icons.iter().map(|icon| icon.names.type_literal.as_str()))
}

/// The interface describing one icon record.
pub fn icon_interface(interface_name: &str, type_name: &str) -> Interface {
    Interface::new(interface_name)
        .field("name", type_name)
        .field("data", "string")
}
