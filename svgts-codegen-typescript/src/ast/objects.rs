//! TypeScript object literal builder.

use svgts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Quote `value` as a single-quoted TypeScript string literal.
///
/// Backslashes, single quotes and line breaks are escaped.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// A string-valued property in an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    fn render(&self) -> String {
        format!("{}: {},", self.key, string_literal(&self.value))
    }
}

/// Builder for object literals with string values.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Build the object as a string, without a trailing newline.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        let mut code = builder.build();
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self
                .properties
                .iter()
                .map(|prop| CodeFragment::Line(prop.render()))
                .collect(),
            close: Some("}".to_string()),
        }]
    }
}
