use std::path::Path;

use svgts_core::{Error, Result};

/// Read an SVG file as UTF-8 text with every line break collapsed to a space.
pub fn extract_svg_content(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })
    })?;
    Ok(collapse_line_breaks(&raw))
}

/// Replace each `\r\n`, `\n` or lone `\r` with a single space.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_collapse_line_breaks() {
        assert_eq!(collapse_line_breaks("a\nb"), "a b");
        assert_eq!(collapse_line_breaks("a\r\nb"), "a b");
        assert_eq!(collapse_line_breaks("a\rb"), "a b");
        assert_eq!(collapse_line_breaks("a\n\nb"), "a  b");
        assert_eq!(collapse_line_breaks("<svg/>"), "<svg/>");
    }

    #[test]
    fn test_extract_svg_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("home.svg");
        fs::write(&path, "<svg>\r\n  <path/>\n</svg>\n").unwrap();

        let content = extract_svg_content(&path).unwrap();

        assert_eq!(content, "<svg>   <path/> </svg> ");
    }

    #[test]
    fn test_extract_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = extract_svg_content(&temp.path().join("missing.svg")).unwrap_err();
        assert!(matches!(*err, Error::ReadFile { .. }));
    }

    #[test]
    fn test_extract_rejects_non_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.svg");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(extract_svg_content(&path).is_err());
    }
}
