//! Property accessors for widget `<object>` elements
//!
//! All lookups are non-recursive (direct children only) and total:
//! absence is a normal outcome, never an error. Callers decide whether a
//! missing property means "omit the fragment" or "use a default".

use crate::xml::{Element, XmlNode};

/// First direct `<property name="...">` child with a matching name.
pub fn find_property<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element
        .elements_named("property")
        .find(|prop| prop.attr("name") == Some(name))
}

/// Remove the first matching property child. Returns whether one was removed.
pub fn remove_property(element: &mut Element, name: &str) -> bool {
    let index = element.children.iter().position(|node| {
        matches!(node, XmlNode::Element(el)
            if el.tag == "property" && el.attr("name") == Some(name))
    });
    match index {
        Some(index) => {
            element.children.remove(index);
            true
        }
        None => false,
    }
}

/// Scalar text value of a property, if it has one.
pub fn property_text<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    find_property(element, name).and_then(Element::text)
}

/// Nested `<object>` value of a property, if it has one.
pub fn property_object<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    find_property(element, name).and_then(Element::first_object)
}

/// True when the property is present with a true-ish scalar value.
pub fn property_is_true(element: &Element, name: &str) -> bool {
    property_text(element, name)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Rebuild a property under a new name, keeping its value and secondary
/// attributes (`translatable`, binding attributes, ...).
pub fn copy_property_as(source: &Element, new_name: &str) -> Element {
    let mut prop = Element::new("property");
    prop.set_attr("name", new_name);
    for (key, value) in &source.attributes {
        if key != "name" {
            prop.set_attr(key, value);
        }
    }
    prop.children = source.children.clone();
    prop
}
