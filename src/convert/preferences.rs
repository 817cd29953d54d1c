//! AdwPreferencesPage / AdwPreferencesGroup conversions
//!
//! A preferences page becomes a scrolled window around a vertical box with
//! fixed margins and spacing. A preferences group becomes a frame holding
//! a selection-disabled boxed list; the group description, when present,
//! is materialized as the first (non-activatable) row.

use crate::xml::props;
use crate::xml::Element;

const PAGE_MARGIN: &str = "12";
const PAGE_SPACING: &str = "18";

pub fn convert_preferences_page(pref_page: &Element) -> Element {
    let mut scrolled = Element::object("GtkScrolledWindow");
    if let Some(id) = pref_page.id() {
        scrolled.set_attr("id", id);
    }
    scrolled.add_property("hscrollbar-policy", "never");

    let mut gtk_box = Element::object("GtkBox");
    gtk_box.add_property("orientation", "vertical");
    gtk_box.add_property("margin-start", PAGE_MARGIN);
    gtk_box.add_property("margin-end", PAGE_MARGIN);
    gtk_box.add_property("margin-top", PAGE_MARGIN);
    gtk_box.add_property("margin-bottom", PAGE_MARGIN);
    gtk_box.add_property("spacing", PAGE_SPACING);

    for child in pref_page.elements_named("child") {
        gtk_box.push_element(child.clone());
    }

    let mut child = Element::new("child");
    child.push_element(gtk_box);
    scrolled.push_element(child);
    scrolled
}

pub fn convert_preferences_group(pref_group: &Element) -> Element {
    let mut frame = Element::object("GtkFrame");
    if let Some(id) = pref_group.id() {
        frame.set_attr("id", id);
    }

    match props::find_property(pref_group, "title") {
        Some(title_prop) => frame.push_element(props::copy_property_as(title_prop, "label")),
        None => log::warn!("AdwPreferencesGroup has no title; frame is unlabeled"),
    }

    let mut listbox = Element::object("GtkListBox");
    listbox.add_property("selection-mode", "none");
    listbox.push_element(Element::style_block("boxed-list"));

    // the description becomes the first row, ahead of the real children
    if let Some(description_prop) = props::find_property(pref_group, "description") {
        listbox.push_element(description_row(description_prop));
    }

    for child in pref_group.elements_named("child") {
        listbox.push_element(child.clone());
    }

    let mut child = Element::new("child");
    child.push_element(listbox);
    frame.push_element(child);
    frame
}

fn description_row(description_prop: &Element) -> Element {
    let mut label = Element::object("GtkLabel");
    label.push_element(props::copy_property_as(description_prop, "label"));
    label.add_property("wrap", "True");
    label.add_property("xalign", "0");

    let mut row = Element::object("GtkListBoxRow");
    row.add_property("activatable", "False");
    let mut row_child = Element::new("child");
    row_child.push_element(label);
    row.push_element(row_child);

    let mut child = Element::new("child");
    child.push_element(row);
    child
}
