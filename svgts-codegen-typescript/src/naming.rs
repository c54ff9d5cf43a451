//! Names derived from an icon's file name.

use svgts_codegen::paths::typescript::ICON_MODULE_SUFFIX;
use svgts_core::{to_kebab_case, to_pascal_case, to_snake_case};
use svgts_options::Delimiter;

use crate::ast::string_literal;

/// The three names generated for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNames {
    /// Name of the exported constant: prefix plus the PascalCase base name.
    pub variable: String,
    /// Quoted member of the type union, cased by the chosen delimiter.
    pub type_literal: String,
    /// Value of the `name` property, always snake_case.
    pub property_key: String,
}

impl IconNames {
    /// Derive all names from a file's base name (the part before its first dot).
    pub fn derive(base_name: &str, prefix: &str, delimiter: Delimiter) -> Self {
        Self {
            variable: format!("{}{}", prefix, to_pascal_case(base_name)),
            type_literal: string_literal(&delimiter.apply(base_name)),
            property_key: to_snake_case(base_name),
        }
    }

    /// File stem of the lazy-loading module holding this icon.
    pub fn module_stem(&self) -> String {
        format!("{}{}", to_kebab_case(&self.variable), ICON_MODULE_SUFFIX)
    }
}
