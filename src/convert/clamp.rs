//! AdwClamp → centered GtkBox
//!
//! `maximum-size` maps to `max-width-request`; `tightening-threshold` has
//! no GTK3 counterpart and is dropped.

use crate::xml::props;
use crate::xml::Element;

pub fn convert_clamp(clamp: &Element) -> Element {
    let mut gtk_box = Element::object("GtkBox");
    if let Some(id) = clamp.id() {
        gtk_box.set_attr("id", id);
    }
    gtk_box.add_property("halign", "center");

    match props::property_text(clamp, "maximum-size") {
        Some(value) => gtk_box.add_property("max-width-request", value),
        None => log::warn!("AdwClamp has no maximum-size; output box is unbounded"),
    }

    for prop in clamp.elements_named("property") {
        let name = prop.attr("name");
        if matches!(name, Some("maximum-size") | Some("tightening-threshold")) {
            continue;
        }
        gtk_box.push_element(prop.clone());
    }

    for style in clamp.elements_named("style") {
        gtk_box.push_element(style.clone());
    }

    for child in clamp.elements_named("child") {
        gtk_box.push_element(child.clone());
    }

    gtk_box
}
