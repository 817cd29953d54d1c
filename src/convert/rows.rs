//! AdwActionRow / AdwButtonRow / AdwSwitchRow → GtkListBoxRow
//!
//! The row's composite layout is rebuilt from plain boxes: a horizontal
//! box holding prefix children, a vertical title/subtitle block, and
//! suffix children, in that order. The switch row is the action row
//! conversion plus a trailing switch — converters compose by delegation.

use crate::xml::props;
use crate::xml::{Element, XmlNode};

const ROW_SPACING: &str = "12";
const ROW_MARGIN: &str = "12";
const TITLE_BLOCK_SPACING: &str = "3";

pub fn convert_action_row(action_row: &Element) -> Element {
    let mut row = Element::object("GtkListBoxRow");
    if let Some(id) = action_row.id() {
        row.set_attr("id", id);
    }

    // an activatable-widget reference cannot be expressed on a plain list
    // box row; degrade to the boolean
    if props::find_property(action_row, "activatable-widget").is_some() {
        row.add_property("activatable", "True");
    }
    if let Some(value) = props::property_text(action_row, "selectable") {
        row.add_property("selectable", value);
    }

    let mut hbox = Element::object("GtkBox");
    hbox.add_property("orientation", "horizontal");
    hbox.add_property("spacing", ROW_SPACING);
    hbox.add_property("margin-start", ROW_MARGIN);
    hbox.add_property("margin-end", ROW_MARGIN);
    hbox.add_property("margin-top", ROW_MARGIN);
    hbox.add_property("margin-bottom", ROW_MARGIN);

    for prefix in action_row.elements_named("child") {
        if prefix.attr("type") == Some("prefix") {
            hbox.push_element(prefix.clone());
        }
    }

    hbox.push_element(title_block(action_row));

    for suffix in action_row.elements_named("child") {
        if suffix.attr("type") == Some("suffix") {
            hbox.push_element(suffix.clone());
        }
    }

    let mut child = Element::new("child");
    child.push_element(hbox);
    row.push_element(child);
    row
}

pub fn convert_switch_row(switch_row: &Element) -> Element {
    let mut row = convert_action_row(switch_row);

    let mut switch = Element::object("GtkSwitch");
    if let Some(id) = switch_row.id() {
        // keep the switch addressable for bindings without duplicating
        // the row's own id
        switch.set_attr("id", &format!("{}_switch", id));
    }
    switch.add_property("valign", "center");

    let mut switch_child = Element::new("child");
    switch_child.push_element(switch);

    match row_hbox_mut(&mut row) {
        Some(hbox) => hbox.push_element(switch_child),
        None => log::warn!("AdwSwitchRow conversion produced no inner box; dropping switch"),
    }
    row
}

/// The horizontal layout box generated by [`convert_action_row`].
fn row_hbox_mut(row: &mut Element) -> Option<&mut Element> {
    row.children.iter_mut().find_map(|node| match node {
        XmlNode::Element(child) if child.tag == "child" => {
            child.children.iter_mut().find_map(|inner| match inner {
                XmlNode::Element(obj) if obj.class() == Some("GtkBox") => Some(obj),
                _ => None,
            })
        }
        _ => None,
    })
}

/// Vertical box holding the title label and, when present, the dimmed
/// subtitle label.
fn title_block(action_row: &Element) -> Element {
    let mut vbox = Element::object("GtkBox");
    vbox.add_property("orientation", "vertical");
    vbox.add_property("hexpand", "True");
    vbox.add_property("valign", "center");
    vbox.add_property("spacing", TITLE_BLOCK_SPACING);

    match props::find_property(action_row, "title") {
        Some(title_prop) => {
            let mut label = Element::object("GtkLabel");
            label.push_element(props::copy_property_as(title_prop, "label"));
            label.add_property("xalign", "0");
            if props::property_is_true(action_row, "use-markup") {
                label.add_property("use-markup", "True");
            }
            if props::property_is_true(action_row, "use-underline") {
                label.add_property("use-underline", "True");
            }
            vbox.push_element(wrap_in_child(label));
        }
        None => log::warn!("action row has no title property"),
    }

    if let Some(subtitle_prop) = props::find_property(action_row, "subtitle") {
        let mut label = Element::object("GtkLabel");
        label.push_element(props::copy_property_as(subtitle_prop, "label"));
        label.add_property("xalign", "0");
        label.push_element(Element::style_block("dim-label"));
        vbox.push_element(wrap_in_child(label));
    }

    let mut child = Element::new("child");
    child.push_element(vbox);
    child
}

fn wrap_in_child(obj: Element) -> Element {
    let mut child = Element::new("child");
    child.push_element(obj);
    child
}
