//! Owned XML tree for GTK builder documents
//!
//! The converter works on a fully owned, mutable element tree rather than
//! an event stream: conversion rules replace whole subtrees in place, and
//! sibling order must survive from parse to serialization.
//!
//! The tree is deliberately small. A `Document` holds the top-level nodes
//! (comments may precede the root `<interface>`); an `Element` holds a tag
//! name, its attributes in declaration order, and its children in document
//! order. Text content is a child node, which is what lets `<property>`
//! elements carry either a scalar value or a nested `<object>`.
//!
//! Grammar-aware helpers (`class()`, `objects()`, ...) live on `Element`;
//! everything property-related is in [`props`].

pub mod parser;
pub mod props;
pub mod serializer;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
    Comment(String),
}

impl XmlNode {
    /// The contained element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            XmlNode::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            XmlNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// An XML element: tag, ordered attributes, ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a widget `<object>` element with a `class` attribute
    pub fn object(class: &str) -> Self {
        let mut el = Element::new("object");
        el.set_attr("class", class);
        el
    }

    /// Create a `<property name="...">value</property>` element
    pub fn property(name: &str, value: &str) -> Self {
        let mut el = Element::new("property");
        el.set_attr("name", name);
        el.children.push(XmlNode::Text(value.to_string()));
        el
    }

    /// Create a `<style><class name="..."/></style>` block
    pub fn style_block(class_name: &str) -> Self {
        let mut class_el = Element::new("class");
        class_el.set_attr("name", class_name);
        let mut style = Element::new("style");
        style.children.push(XmlNode::Element(class_el));
        style
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value or appending
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attributes.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// The `class` attribute (widget class name for `<object>` elements)
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// First text child, if any
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            XmlNode::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Append a child element
    pub fn push_element(&mut self, el: Element) {
        self.children.push(XmlNode::Element(el));
    }

    /// Append a `<property name="...">value</property>` child
    pub fn add_property(&mut self, name: &str, value: &str) {
        self.push_element(Element::property(name, value));
    }

    /// Iterate over child elements
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Iterate over child elements with a given tag
    pub fn elements_named<'a, 'b>(
        &'a self,
        tag: &'b str,
    ) -> impl Iterator<Item = &'a Element> + use<'a, 'b> {
        self.elements().filter(move |el| el.tag == tag)
    }

    /// First child element with a given tag
    pub fn first_element_named(&self, tag: &str) -> Option<&Element> {
        self.elements_named(tag).next()
    }

    /// Iterate over direct `<object>` children
    pub fn objects(&self) -> impl Iterator<Item = &Element> {
        self.elements_named("object")
    }

    /// First direct `<object>` child
    pub fn first_object(&self) -> Option<&Element> {
        self.first_element_named("object")
    }
}

/// A whole document: the root element plus any top-level comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<XmlNode>,
}

impl Document {
    /// The root element of the document
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(XmlNode::as_element)
    }

    pub fn root_mut(&mut self) -> Option<&mut Element> {
        self.nodes.iter_mut().find_map(XmlNode::as_element_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::object("GtkBox");
        el.set_attr("class", "GtkLabel");
        assert_eq!(el.class(), Some("GtkLabel"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_property_builder() {
        let prop = Element::property("orientation", "vertical");
        assert_eq!(prop.attr("name"), Some("orientation"));
        assert_eq!(prop.text(), Some("vertical"));
    }

    #[test]
    fn test_style_block() {
        let style = Element::style_block("dim-label");
        assert_eq!(style.tag, "style");
        let class = style.first_element_named("class").unwrap();
        assert_eq!(class.attr("name"), Some("dim-label"));
    }

    #[test]
    fn test_elements_named_filters_by_tag() {
        let mut el = Element::new("object");
        el.push_element(Element::property("a", "1"));
        el.push_element(Element::new("child"));
        el.push_element(Element::property("b", "2"));

        let names: Vec<_> = el
            .elements_named("property")
            .filter_map(|p| p.attr("name"))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_document_root_skips_comments() {
        let mut doc = Document::default();
        doc.nodes.push(XmlNode::Comment(" license ".to_string()));
        doc.nodes.push(XmlNode::Element(Element::new("interface")));
        assert_eq!(doc.root().unwrap().tag, "interface");
    }
}
