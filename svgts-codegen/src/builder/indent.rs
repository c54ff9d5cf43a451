//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the given width, at most 8.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Re-indent `code` written with `from` indentation to use `self`.
    ///
    /// Only whole leading indent units are replaced; the rest of each line is
    /// left untouched, so string literals keep their content.
    pub fn reindent(&self, code: &str, from: Indent) -> String {
        let unit = from.as_str();
        if unit.is_empty() {
            return code.to_string();
        }
        let mut out = String::with_capacity(code.len());
        for line in code.split_inclusive('\n') {
            let mut rest = line;
            while let Some(stripped) = rest.strip_prefix(unit) {
                out.push_str(self.as_str());
                rest = stripped;
            }
            out.push_str(rest);
        }
        out
    }
}
