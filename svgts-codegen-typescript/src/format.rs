//! Pretty-printing of assembled TypeScript.

use oxc::{
    allocator::Allocator,
    codegen::{Codegen, CodegenOptions},
    parser::Parser,
    span::SourceType,
};
use svgts_codegen::builder::Indent;
use svgts_core::{Error, Result};

/// Turns assembled source text into its final, formatted form.
pub trait Formatter {
    /// Format `source`; `name` identifies the output unit in errors.
    fn format(&self, name: &str, source: &str) -> Result<String>;
}

/// Formatter backed by the `oxc` parser and code generator.
///
/// The source must parse as TypeScript. It is printed back with single quotes
/// and two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFormatter;

impl Formatter for TypeScriptFormatter {
    fn format(&self, name: &str, source: &str) -> Result<String> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
        if ret.panicked || !ret.errors.is_empty() {
            let message = if ret.errors.is_empty() {
                "parser aborted".to_string()
            } else {
                ret.errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            return Err(Box::new(Error::Format {
                file: name.to_string(),
                message,
            }));
        }

        let code = Codegen::new()
            .with_options(CodegenOptions {
                single_quote: true,
                ..CodegenOptions::default()
            })
            .build(&ret.program)
            .code;
        Ok(Indent::TYPESCRIPT.reindent(&code, Indent::Tab))
    }
}
