//! Casing utilities used to derive identifiers from icon file names.
//!
//! Word boundaries are the ones front-end tooling conventionally uses:
//! separators (anything that is not a letter or digit), a lowercase letter
//! followed by an uppercase one, the last capital of an acronym followed by a
//! lowercase letter (`XMLHttp` -> `XML`, `Http`), and letter/digit transitions
//! (`icon2x` -> `icon`, `2`, `x`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    Lower,
    Digit,
}

fn kind_of(c: char) -> Option<CharKind> {
    if c.is_numeric() {
        Some(CharKind::Digit)
    } else if c.is_uppercase() {
        Some(CharKind::Upper)
    } else if c.is_alphabetic() {
        // Caseless letters behave like lowercase ones.
        Some(CharKind::Lower)
    } else {
        None
    }
}

/// Split a string into words (e.g., "arrowLeft-2x" -> ["arrow", "Left", "2", "x"])
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharKind> = None;

    for c in s.chars() {
        let Some(kind) = kind_of(c) else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        };

        match (prev, kind) {
            (Some(CharKind::Lower), CharKind::Upper)
            | (Some(CharKind::Digit), CharKind::Upper | CharKind::Lower)
            | (Some(CharKind::Upper | CharKind::Lower), CharKind::Digit) => {
                words.push(std::mem::take(&mut current));
            }
            (Some(CharKind::Upper), CharKind::Lower) if current.chars().count() > 1 => {
                // End of an acronym: its last capital starts the next word.
                if let Some(last) = current.pop() {
                    words.push(std::mem::take(&mut current));
                    current.push(last);
                }
            }
            _ => {}
        }

        current.push(c);
        prev = Some(kind);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Upper-case the first character, leaving the rest untouched (e.g., "arrowLeft" -> "ArrowLeft")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to camelCase (e.g., "arrow-left" -> "arrowLeft")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "arrow-left" -> "ArrowLeft")
pub fn to_pascal_case(s: &str) -> String {
    capitalize(&to_camel_case(s))
}

/// Convert a string to kebab-case (e.g., "ArrowLeft" -> "arrow-left")
pub fn to_kebab_case(s: &str) -> String {
    join_lowercase(s, "-")
}

/// Convert a string to snake_case (e.g., "ArrowLeft" -> "arrow_left")
pub fn to_snake_case(s: &str) -> String {
    join_lowercase(s, "_")
}

fn join_lowercase(s: &str, separator: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
