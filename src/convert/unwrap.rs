//! Wrapper/page unwrapping
//!
//! AdwViewStackPage and AdwLeafletPage hold exactly one child plus
//! metadata and have no GTK3 equivalent. They are dissolved at the
//! PARENT's scope: the parent scans its direct `<child>` slots, promotes
//! each wrapper's `child` property object into the slot, and relocates the
//! wrapper's metadata onto the slot itself — `name` as the slot's `type`
//! attribute, and (for stack pages) `name`/`title`/`icon-name` into a
//! `<packing>` block. After unwrapping, no trace of the wrapper remains.

use crate::xml::props;
use crate::xml::{Element, XmlNode};

/// Unwrap AdwViewStackPage wrappers among `parent`'s direct children.
pub fn unwrap_stack_pages(parent: &mut Element) {
    for node in parent.children.iter_mut() {
        if let XmlNode::Element(child) = node {
            if child.tag == "child" {
                unwrap_page(child, "AdwViewStackPage", PageMetadata::Packing);
            }
        }
    }
}

/// Unwrap AdwLeafletPage wrappers among `parent`'s direct children.
pub fn unwrap_leaflet_pages(parent: &mut Element) {
    for node in parent.children.iter_mut() {
        if let XmlNode::Element(child) = node {
            if child.tag == "child" {
                unwrap_page(child, "AdwLeafletPage", PageMetadata::TypeOnly);
            }
        }
    }
}

/// Where the wrapper's metadata is relocated to.
enum PageMetadata {
    /// `name` → slot `type` attribute plus a `<packing>` block carrying
    /// `name`, `title`, and `icon-name`
    Packing,
    /// `name` → slot `type` attribute only
    TypeOnly,
}

fn unwrap_page(child: &mut Element, wrapper_class: &str, metadata: PageMetadata) {
    let position = child.children.iter().position(|node| {
        matches!(node, XmlNode::Element(el)
            if el.tag == "object" && el.class() == Some(wrapper_class))
    });
    let Some(position) = position else {
        return;
    };

    let inner = {
        let XmlNode::Element(wrapper) = &child.children[position] else {
            return;
        };
        match props::property_object(wrapper, "child") {
            Some(inner) => inner.clone(),
            None => {
                log::warn!("{} has no child property; leaving wrapper in place", wrapper_class);
                return;
            }
        }
    };

    let XmlNode::Element(wrapper) = child.children.remove(position) else {
        return;
    };
    let name = props::property_text(&wrapper, "name").map(str::to_owned);
    let title = props::property_text(&wrapper, "title").map(str::to_owned);
    let icon_name = props::property_text(&wrapper, "icon-name").map(str::to_owned);

    // promoted child takes the wrapper's slot
    child.children.push(XmlNode::Element(inner));

    if let Some(name) = &name {
        child.set_attr("type", name);
    }

    if let PageMetadata::Packing = metadata {
        let mut packing = Element::new("packing");
        if let Some(name) = &name {
            packing.add_property("name", name);
        }
        if let Some(title) = &title {
            packing.add_property("title", title);
        }
        if let Some(icon_name) = &icon_name {
            packing.add_property("icon-name", icon_name);
        }
        if !packing.children.is_empty() {
            child.children.insert(0, XmlNode::Element(packing));
        }
    }
}
