//! SVG optimization.

use std::borrow::Cow;

use quick_xml::{
    Reader, Writer,
    events::{BytesStart, Event, attributes::Attribute},
};

/// Error returned by an [`SvgOptimizer`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Turns raw SVG markup into an optimized equivalent.
///
/// Implementations must not change how the icon renders.
pub trait SvgOptimizer {
    fn optimize(&self, svg: &str) -> Result<String, BoxError>;
}

/// Namespaces written by drawing tools that carry no rendering information.
const EDITOR_NAMESPACES: &[&str] = &[
    "http://inkscape.sourceforge.net/DTD/sodipodi-0.dtd",
    "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd",
    "http://www.inkscape.org/namespaces/inkscape",
    "http://www.bohemiancoding.com/sketch/ns",
    "http://www.figma.com/figma/ns",
    "http://www.serif.com/",
    "http://www.vector.evaxdesign.sk",
    "http://ns.adobe.com/AdobeIllustrator/10.0/",
    "http://ns.adobe.com/AdobeSVGViewerExtensions/3.0/",
    "http://ns.adobe.com/Extensibility/1.0/",
    "http://ns.adobe.com/Flows/1.0/",
    "http://ns.adobe.com/GenericCustomNamespace/1.0/",
    "http://ns.adobe.com/Graphs/1.0/",
    "http://ns.adobe.com/ImageReplacement/1.0/",
    "http://ns.adobe.com/SaveForWeb/1.0/",
    "http://ns.adobe.com/Variables/1.0/",
    "http://ns.adobe.com/XPath/1.0/",
    "http://schemas.microsoft.com/visio/2003/SVGExtensions/",
    "http://taptrix.com/vectorillustrator/svg_extensions",
    "http://purl.org/dc/elements/1.1/",
    "http://creativecommons.org/ns#",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
];

/// Elements whose text content is rendered; whitespace inside them is kept.
const TEXT_ELEMENTS: &[&[u8]] = &[b"text", b"tspan", b"textPath", b"style", b"script"];

/// Markup-preserving minifier built on `quick-xml`.
///
/// Removes the XML declaration, doctype, processing instructions, comments,
/// `<metadata>`, editor namespaces with everything in them, and whitespace
/// between tags. Every other element and attribute is written back verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgMinifier;

impl SvgOptimizer for SvgMinifier {
    fn optimize(&self, svg: &str) -> Result<String, BoxError> {
        let mut reader = Reader::from_str(svg);
        let mut writer = Writer::new(Vec::with_capacity(svg.len()));
        let mut editor_prefixes: Vec<Vec<u8>> = Vec::new();
        let mut depth = 0usize;
        let mut skip_depth = 0usize;
        let mut text_depth = 0usize;
        let mut saw_root = false;

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                Event::Decl(_) | Event::DocType(_) | Event::PI(_) | Event::Comment(_) => {}
                Event::Start(elem) => {
                    check_root(&mut saw_root, elem.name().as_ref())?;
                    depth += 1;
                    collect_editor_prefixes(&elem, &mut editor_prefixes)?;
                    if skip_depth > 0 || is_dropped(elem.name().as_ref(), &editor_prefixes) {
                        skip_depth += 1;
                        continue;
                    }
                    if TEXT_ELEMENTS.contains(&elem.name().as_ref()) {
                        text_depth += 1;
                    }
                    writer.write_event(Event::Start(strip_editor_data(&elem, &editor_prefixes)?))?;
                }
                Event::End(elem) => {
                    depth = depth.saturating_sub(1);
                    if skip_depth > 0 {
                        skip_depth -= 1;
                        continue;
                    }
                    if TEXT_ELEMENTS.contains(&elem.name().as_ref()) {
                        text_depth = text_depth.saturating_sub(1);
                    }
                    writer.write_event(Event::End(elem))?;
                }
                Event::Empty(elem) => {
                    check_root(&mut saw_root, elem.name().as_ref())?;
                    collect_editor_prefixes(&elem, &mut editor_prefixes)?;
                    if skip_depth > 0 || is_dropped(elem.name().as_ref(), &editor_prefixes) {
                        continue;
                    }
                    writer.write_event(Event::Empty(strip_editor_data(&elem, &editor_prefixes)?))?;
                }
                Event::Text(text) => {
                    let blank = text.iter().all(u8::is_ascii_whitespace);
                    if !blank && depth == 0 {
                        return Err("text outside the <svg> element".into());
                    }
                    if skip_depth == 0 && (!blank || text_depth > 0) {
                        writer.write_event(Event::Text(text))?;
                    }
                }
                event => {
                    if skip_depth == 0 {
                        writer.write_event(event)?;
                    }
                }
            }
        }

        if !saw_root {
            return Err("document has no <svg> element".into());
        }
        if depth != 0 {
            return Err("document ends inside an open element".into());
        }

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn check_root(saw_root: &mut bool, name: &[u8]) -> Result<(), BoxError> {
    if !*saw_root {
        if local_name(name) != b"svg" {
            return Err(format!(
                "root element is <{}>, expected <svg>",
                String::from_utf8_lossy(name)
            )
            .into());
        }
        *saw_root = true;
    }
    Ok(())
}

fn prefix(name: &[u8]) -> Option<&[u8]> {
    name.iter().position(|b| *b == b':').map(|i| &name[..i])
}

fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|b| *b == b':') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

fn is_editor_prefix(name: &[u8], editor_prefixes: &[Vec<u8>]) -> bool {
    prefix(name).is_some_and(|p| editor_prefixes.iter().any(|e| e == p))
}

fn is_dropped(name: &[u8], editor_prefixes: &[Vec<u8>]) -> bool {
    name == b"metadata" || is_editor_prefix(name, editor_prefixes)
}

/// Record the prefixes bound to editor namespaces on this element.
fn collect_editor_prefixes(
    elem: &BytesStart<'_>,
    editor_prefixes: &mut Vec<Vec<u8>>,
) -> Result<(), BoxError> {
    for attr in elem.attributes() {
        let attr = attr?;
        if let Some(bound) = attr.key.as_ref().strip_prefix(b"xmlns:")
            && EDITOR_NAMESPACES
                .iter()
                .any(|ns| ns.as_bytes() == attr.value.as_ref())
            && !editor_prefixes.iter().any(|p| p == bound)
        {
            editor_prefixes.push(bound.to_vec());
        }
    }
    Ok(())
}

/// Copy an element without editor attributes or editor namespace bindings.
fn strip_editor_data(
    elem: &BytesStart<'_>,
    editor_prefixes: &[Vec<u8>],
) -> Result<BytesStart<'static>, BoxError> {
    let mut out = elem.to_owned();
    out.clear_attributes();

    for attr in elem.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        let editor_binding = key
            .strip_prefix(b"xmlns:")
            .is_some_and(|bound| editor_prefixes.iter().any(|p| p == bound));
        if editor_binding || is_editor_prefix(key, editor_prefixes) {
            continue;
        }
        out.push_attribute(Attribute {
            key: attr.key,
            value: double_quote_safe(attr.value),
        });
    }

    Ok(out)
}

/// Attributes are written back in double quotes; a raw `"` taken from a
/// single-quoted value must be escaped.
fn double_quote_safe(value: Cow<'_, [u8]>) -> Cow<'_, [u8]> {
    if !value.contains(&b'"') {
        return value;
    }
    let mut escaped = Vec::with_capacity(value.len() + 8);
    for byte in value.iter() {
        if *byte == b'"' {
            escaped.extend_from_slice(b"&quot;");
        } else {
            escaped.push(*byte);
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"> <!-- editor comment --> <path d="M0 0 L24 24"/> </svg>"#;

    #[test]
    fn test_minifier_strips_comments_and_whitespace() {
        let optimized = SvgMinifier.optimize(ICON).unwrap();

        assert_eq!(
            optimized,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M0 0 L24 24"/></svg>"#
        );
    }

    #[test]
    fn test_minifier_preserves_rendering_attributes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M0 0 L24 24 L0 24 Z"/><circle cx="12" cy="12" r="4"/></svg>"#;

        let optimized = SvgMinifier.optimize(svg).unwrap();

        assert_eq!(optimized, svg);
        assert!(optimized.contains(r#"fill="currentColor""#));
        assert!(optimized.contains(r#"viewBox="0 0 24 24""#));
        assert!(!optimized.contains("width="));
    }

    #[test]
    fn test_minifier_keeps_text_content() {
        let svg = r#"<svg viewBox="0 0 24 24"> <text x="0" y="12">A <tspan>b</tspan></text> </svg>"#;

        let optimized = SvgMinifier.optimize(svg).unwrap();

        assert_eq!(
            optimized,
            r#"<svg viewBox="0 0 24 24"><text x="0" y="12">A <tspan>b</tspan></text></svg>"#
        );
    }

    #[test]
    fn test_minifier_drops_editor_data() {
        let svg = r##"<?xml version="1.0" encoding="UTF-8"?><!DOCTYPE svg><svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd" inkscape:version="1.3" viewBox="0 0 8 8"><metadata><rdf:RDF/></metadata><sodipodi:namedview pagecolor="#fff"><inkscape:grid/></sodipodi:namedview><path inkscape:label="x" d="M0 0h8"/></svg>"##;

        let optimized = SvgMinifier.optimize(svg).unwrap();

        assert_eq!(
            optimized,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8"><path d="M0 0h8"/></svg>"#
        );
    }

    #[test]
    fn test_minifier_keeps_unknown_namespaces() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="&#35;a"/></svg>"#;

        assert_eq!(SvgMinifier.optimize(svg).unwrap(), svg);
    }

    #[test]
    fn test_minifier_escapes_quotes_from_single_quoted_values() {
        let svg = r#"<svg><text font-family='"Fira Sans"'>a</text></svg>"#;

        let optimized = SvgMinifier.optimize(svg).unwrap();

        assert_eq!(
            optimized,
            r#"<svg><text font-family="&quot;Fira Sans&quot;">a</text></svg>"#
        );
    }

    #[test]
    fn test_minifier_is_stable() {
        let once = SvgMinifier.optimize(ICON).unwrap();
        assert_eq!(SvgMinifier.optimize(&once).unwrap(), once);
    }

    #[test]
    fn test_minifier_rejects_invalid_markup() {
        assert!(SvgMinifier.optimize("not an svg").is_err());
        assert!(SvgMinifier.optimize("<html></html>").is_err());
        assert!(SvgMinifier.optimize("<svg><g></svg>").is_err());
        assert!(SvgMinifier.optimize("<svg><g>").is_err());
    }
}
