//! AdwToolbarView → vertical GtkBox
//!
//! The toolbar view's slotted children are flattened into a plain vertical
//! box: `type="top"` bars first, then the `content` widget, then
//! `type="bottom"` bars. Relative order within each slot is kept.

use crate::xml::props;
use crate::xml::Element;

pub fn convert_toolbar_view(toolbar_view: &Element) -> Element {
    let mut gtk_box = Element::object("GtkBox");
    if let Some(id) = toolbar_view.id() {
        gtk_box.set_attr("id", id);
    }
    gtk_box.add_property("orientation", "vertical");

    // the content property is consumed below; everything else carries over
    for prop in toolbar_view.elements_named("property") {
        if prop.attr("name") == Some("content") {
            continue;
        }
        gtk_box.push_element(prop.clone());
    }

    for style in toolbar_view.elements_named("style") {
        gtk_box.push_element(style.clone());
    }

    for child in toolbar_view.elements_named("child") {
        if child.attr("type") == Some("top") {
            gtk_box.push_element(untyped_child(child));
        }
    }

    match props::property_object(toolbar_view, "content") {
        Some(content) => {
            let mut child = Element::new("child");
            child.push_element(content.clone());
            gtk_box.push_element(child);
        }
        None => log::warn!("AdwToolbarView has no content property; emitting bars only"),
    }

    for child in toolbar_view.elements_named("child") {
        if child.attr("type") == Some("bottom") {
            gtk_box.push_element(untyped_child(child));
        }
    }

    gtk_box
}

/// Rewrap a slotted child's object in a fresh untyped `<child>`.
fn untyped_child(child: &Element) -> Element {
    let mut new_child = Element::new("child");
    if let Some(obj) = child.first_object() {
        new_child.push_element(obj.clone());
    }
    new_child
}
