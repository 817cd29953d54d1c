//! Flat rewrites with no structural change
//!
//! Everything here is a one-to-one rename, a property drop, or a trivial
//! wrapper removal — the rules the structural registry does not need.
//! They run after the structural pass so that wrapper classes
//! (AdwViewStackPage, AdwLeafletPage) are unwrapped before their
//! containers (AdwViewStack, AdwLeaflet) get renamed.

use crate::xml::{Element, XmlNode};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Widget classes renamed one-to-one, structure untouched.
static CLASS_RENAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AdwApplicationWindow", "GtkApplicationWindow"),
        ("AdwHeaderBar", "GtkHeaderBar"),
        ("AdwViewStack", "GtkStack"),
        ("AdwViewSwitcher", "GtkStackSwitcher"),
        ("AdwViewSwitcherBar", "GtkStackSwitcher"),
        ("AdwSpinner", "GtkSpinner"),
        ("AdwNavigationView", "GtkStack"),
        ("AdwNavigationPage", "GtkBox"),
        ("AdwLeaflet", "GtkStack"),
    ])
});

/// Template parent classes renamed one-to-one.
static TEMPLATE_RENAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AdwApplicationWindow", "GtkApplicationWindow"),
        ("AdwPreferencesDialog", "GtkDialog"),
    ])
});

/// GTK4-only properties with no GTK3 counterpart, dropped wherever found.
const DROPPED_PROPERTIES: &[&str] = &[
    "primary",
    "can-navigate-back",
    "can-unfold",
    "propagation-phase",
];

/// GTK4-only controller/helper objects whose `<child>` slots are removed.
const DROPPED_CHILD_CLASSES: &[&str] = &[
    "GtkEventControllerKey",
    "GtkShortcutController",
    "GtkGestureClick",
    "AdwBreakpoint",
];

/// Single-child wrappers dissolved in place (child promoted).
const SIMPLE_UNWRAP_CLASSES: &[&str] = &["AdwToastOverlay", "AdwBin", "GtkWindowHandle"];

/// Apply every flat rewrite to the whole document.
pub fn apply_simple_rewrites(doc: &mut crate::xml::Document) {
    for node in doc.nodes.iter_mut() {
        if let XmlNode::Element(el) = node {
            rewrite_element(el);
        }
    }
}

fn rewrite_element(element: &mut Element) {
    for node in element.children.iter_mut() {
        if let XmlNode::Element(child) = node {
            rewrite_element(child);
        }
    }

    rewrite_requires(element);
    rename_classes(element);
    drop_gtk4_only_children(element);
    unwrap_simple_containers(element);
}

fn rewrite_requires(element: &mut Element) {
    // <requires lib="gtk" version="4.0"/> → gtk+ 3.0; the adwaita
    // requires line is removed by drop_gtk4_only_children below
    if element.tag == "requires" && element.attr("lib") == Some("gtk") {
        element.set_attr("lib", "gtk+");
        element.set_attr("version", "3.0");
    }
}

fn rename_classes(element: &mut Element) {
    if element.tag == "object" {
        if let Some(renamed) = element.class().and_then(|c| CLASS_RENAMES.get(c)) {
            let renamed = renamed.to_string();
            element.set_attr("class", &renamed);
        }
    }
    if element.tag == "template" {
        if let Some(renamed) = element.attr("parent").and_then(|p| TEMPLATE_RENAMES.get(p)) {
            let renamed = renamed.to_string();
            element.set_attr("parent", &renamed);
        }
    }
}

fn drop_gtk4_only_children(element: &mut Element) {
    element.children.retain(|node| {
        let XmlNode::Element(el) = node else {
            return true;
        };
        if el.tag == "requires" && el.attr("lib") == Some("adwaita") {
            return false;
        }
        if el.tag == "property"
            && el
                .attr("name")
                .is_some_and(|name| DROPPED_PROPERTIES.contains(&name))
        {
            return false;
        }
        if el.tag == "child"
            && el
                .first_object()
                .and_then(Element::class)
                .is_some_and(|class| DROPPED_CHILD_CLASSES.contains(&class))
        {
            return false;
        }
        true
    });
}

fn unwrap_simple_containers(element: &mut Element) {
    for node in element.children.iter_mut() {
        let XmlNode::Element(el) = node else { continue };
        if el.tag != "object" {
            continue;
        }
        let Some(class) = el.class() else { continue };
        if !SIMPLE_UNWRAP_CLASSES.contains(&class) {
            continue;
        }

        // the sole child lives either in a `child` property or in a
        // direct <child> slot
        let inner = crate::xml::props::property_object(el, "child")
            .or_else(|| {
                el.first_element_named("child")
                    .and_then(Element::first_object)
            })
            .cloned();
        match inner {
            Some(inner) => *el = inner,
            None => log::warn!("{} has no child to promote; leaving wrapper in place", class),
        }
    }
}
