//! TypeScript AST builders for constants, types, interfaces, imports and exports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod exports;
mod imports;
mod interface;
mod objects;
mod types;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::{JsObject, string_literal};
pub use types::Union;
