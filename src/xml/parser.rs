//! GTK builder XML parsing (text → tree)
//!
//! Builds the owned [`Document`] tree from a quick-xml event stream.
//! Whitespace-only text is dropped here; the serializer re-indents, so
//! original formatting does not need to survive the round trip. Comments
//! are kept (UI files commonly start with a license header).

use crate::error::{ConvertError, ConvertResult};
use crate::xml::{Document, Element, XmlNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse a complete document.
///
/// Fails with [`ConvertError::Parse`] if the input is not well-formed or
/// has no root element.
pub fn parse_document(source: &str) -> ConvertResult<Document> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut doc = Document::default();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| parse_error(&reader, &err))?;
        match event {
            Event::Start(start) => {
                let el = element_from_start(&reader, &start)?;
                stack.push(el);
            }
            Event::Empty(start) => {
                let el = element_from_start(&reader, &start)?;
                attach(&mut stack, &mut doc, XmlNode::Element(el));
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| ConvertError::Parse("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut doc, XmlNode::Element(el));
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|err| parse_error(&reader, &err))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Text(text.into_owned()));
                }
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(data.as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Text(text));
                }
            }
            Event::Comment(comment) => {
                let text = String::from_utf8_lossy(comment.as_ref()).into_owned();
                attach(&mut stack, &mut doc, XmlNode::Comment(text));
            }
            // The builder grammar has no doctype or processing instructions
            Event::Decl(_) | Event::DocType(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(ConvertError::Parse(format!(
            "unclosed element <{}>",
            stack[stack.len() - 1].tag
        )));
    }
    if doc.root().is_none() {
        return Err(ConvertError::Parse(
            "document has no root element".to_string(),
        ));
    }
    Ok(doc)
}

fn parse_error(reader: &Reader<&[u8]>, err: &dyn std::fmt::Display) -> ConvertError {
    ConvertError::Parse(format!(
        "{} at byte offset {}",
        err,
        reader.buffer_position()
    ))
}

fn element_from_start(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> ConvertResult<Element> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut el = Element::new(&tag);
    for attr in start.attributes() {
        let attr = attr.map_err(|err| parse_error(reader, &err))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| parse_error(reader, &err))?
            .into_owned();
        el.attributes.push((key, value));
    }
    Ok(el)
}

fn attach(stack: &mut Vec<Element>, doc: &mut Document, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => doc.nodes.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_object() {
        let doc = parse_document(
            r#"<interface>
  <object class="GtkLabel" id="greeting">
    <property name="label">Hello</property>
  </object>
</interface>"#,
        )
        .unwrap();

        let root = doc.root().unwrap();
        assert_eq!(root.tag, "interface");
        let obj = root.first_object().unwrap();
        assert_eq!(obj.class(), Some("GtkLabel"));
        assert_eq!(obj.id(), Some("greeting"));
        let prop = obj.first_element_named("property").unwrap();
        assert_eq!(prop.text(), Some("Hello"));
    }

    #[test]
    fn test_parse_preserves_attribute_order() {
        let doc = parse_document(r#"<requires lib="gtk" version="4.0"/>"#).unwrap();
        let root = doc.root().unwrap();
        let keys: Vec<_> = root.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["lib", "version"]);
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let doc =
            parse_document(r#"<property name="label">a &amp; b &lt;c&gt;</property>"#).unwrap();
        assert_eq!(doc.root().unwrap().text(), Some("a & b <c>"));
    }

    #[test]
    fn test_parse_keeps_top_level_comment() {
        let doc = parse_document("<!-- Copyright -->\n<interface/>").unwrap();
        assert!(matches!(&doc.nodes[0], XmlNode::Comment(c) if c.contains("Copyright")));
        assert_eq!(doc.root().unwrap().tag, "interface");
    }

    #[test]
    fn test_parse_drops_indentation_whitespace() {
        let doc = parse_document("<a>\n  <b/>\n</a>").unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_parse_malformed_input_is_parse_error() {
        let result = parse_document("<interface><object></interface>");
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_input_is_parse_error() {
        let result = parse_document("   ");
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }
}
