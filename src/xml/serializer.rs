//! GTK builder XML serialization (tree → text)
//!
//! Output shape: XML declaration, two-space indentation, UTF-8, childless
//! elements collapsed to `<tag/>`. Text content stays inline with its
//! element so property values come out byte-exact.

use crate::error::{ConvertError, ConvertResult};
use crate::xml::{Document, Element, XmlNode};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const INDENT: u8 = b' ';
const INDENT_WIDTH: usize = 2;

/// Serialize a document to a UTF-8 string with an XML declaration.
pub fn serialize_document(doc: &Document) -> ConvertResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), INDENT, INDENT_WIDTH);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialize_error)?;

    for node in &doc.nodes {
        write_node(&mut writer, node)?;
    }

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes)
        .map_err(|err| ConvertError::Serialize(format!("output is not UTF-8: {}", err)))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> ConvertResult<()> {
    match node {
        XmlNode::Element(el) => write_element(writer, el),
        XmlNode::Text(text) => writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(serialize_error),
        XmlNode::Comment(text) => writer
            .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
            .map_err(serialize_error),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> ConvertResult<()> {
    let mut start = BytesStart::new(el.tag.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialize_error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialize_error)?;
    for child in &el.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(el.tag.as_str())))
        .map_err(serialize_error)
}

fn serialize_error(err: impl std::fmt::Display) -> ConvertError {
    ConvertError::Serialize(err.to_string())
}
