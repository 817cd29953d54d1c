//! Tree traversal and in-place replacement
//!
//! # The Algorithm
//!
//! Applied recursively, depth-first, so a node's children are fully
//! normalized before the node's own slots are touched:
//!
//! 1. **Recurse** into every child element.
//! 2. **Substitute** each direct `<object>` child whose class is in the
//!    registry, at its original sibling position. The candidates are
//!    snapshotted up front; if a nested unwrap has meanwhile rearranged
//!    the siblings, the replacement is appended rather than dropped.
//! 3. **Unwrap** stack-page and leaflet-page wrappers among the direct
//!    children.
//! 4. **Property-nested pass**: substitute objects found directly inside
//!    `<property>` values — but with the narrower
//!    [`WidgetClass::allowed_in_property`] subset, not the full registry.
//!
//! The two substitution passes are deliberately NOT unified. Only
//! container-like widgets legally appear as property values, and step 2
//! skips `<property>` parents entirely so that the reduced set in step 4
//! is the only rule set ever applied there. Tests pin this asymmetry.
//!
//! Sibling order after a full pass is derivable from input order plus the
//! fixed slot priorities of the individual converters; no converter reads
//! anything outside its own subtree.

use crate::convert::registry::WidgetClass;
use crate::convert::unwrap;
use crate::xml::{Element, XmlNode};

/// Normalize one element and everything below it.
pub fn process_element(element: &mut Element) {
    for node in element.children.iter_mut() {
        if let XmlNode::Element(child) = node {
            process_element(child);
        }
    }

    if element.tag != "property" {
        substitute_objects(element, |_| true);
    }

    unwrap::unwrap_stack_pages(element);
    unwrap::unwrap_leaflet_pages(element);

    for node in element.children.iter_mut() {
        if let XmlNode::Element(child) = node {
            if child.tag == "property" {
                substitute_objects(child, WidgetClass::allowed_in_property);
            }
        }
    }
}

/// Replace registered `<object>` children of `parent` in place.
///
/// Candidates are snapshotted (index, class, clone) before any mutation.
/// Replacement lands at the recorded index when that slot still holds the
/// original object; otherwise the converted node is appended.
fn substitute_objects(parent: &mut Element, filter: impl Fn(WidgetClass) -> bool) {
    let candidates: Vec<(usize, WidgetClass, Element)> = parent
        .children
        .iter()
        .enumerate()
        .filter_map(|(index, node)| match node {
            XmlNode::Element(el) if el.tag == "object" => el
                .class()
                .and_then(WidgetClass::from_class)
                .filter(|class| filter(*class))
                .map(|class| (index, class, el.clone())),
            _ => None,
        })
        .collect();

    for (index, class, source) in candidates {
        let converted = class.convert(&source);
        let still_in_place = matches!(
            parent.children.get(index),
            Some(XmlNode::Element(el)) if el.tag == "object" && el.class() == source.class()
        );
        if still_in_place {
            parent.children[index] = XmlNode::Element(converted);
        } else {
            parent.children.push(XmlNode::Element(converted));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parser::parse_document;
    use crate::xml::props;

    fn process(source: &str) -> Element {
        let mut root = parse_document(source).unwrap().root().unwrap().clone();
        process_element(&mut root);
        root
    }

    #[test]
    fn test_unknown_class_passes_through_unchanged() {
        // spec scenario: arbitrary custom widget survives byte-identical
        let source = r#"<interface>
  <object class="MyCustomWidget" id="custom">
    <property name="whatever">42</property>
    <child>
      <object class="AnotherCustom"/>
    </child>
    <style>
      <class name="fancy"/>
    </style>
  </object>
</interface>"#;
        let before = parse_document(source).unwrap().root().unwrap().clone();
        let after = process(source);
        assert_eq!(before, after);
    }

    #[test]
    fn test_nested_widgets_convert_depth_first() {
        let result = process(
            r#"<interface>
  <object class="AdwClamp">
    <property name="maximum-size">400</property>
    <child>
      <object class="AdwActionRow">
        <property name="title">Inner</property>
      </object>
    </child>
  </object>
</interface>"#,
        );

        let outer = result.first_object().unwrap();
        assert_eq!(outer.class(), Some("GtkBox"));
        let inner = outer
            .first_element_named("child")
            .and_then(Element::first_object)
            .unwrap();
        assert_eq!(inner.class(), Some("GtkListBoxRow"));
    }

    #[test]
    fn test_substitution_preserves_sibling_order() {
        let result = process(
            r#"<interface>
  <object class="GtkLabel" id="first"/>
  <object class="AdwClamp" id="middle">
    <property name="maximum-size">200</property>
  </object>
  <object class="GtkLabel" id="last"/>
</interface>"#,
        );

        let summary: Vec<_> = result
            .objects()
            .map(|obj| {
                (
                    obj.class().unwrap().to_string(),
                    obj.id().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("GtkLabel".to_string(), "first".to_string()),
                ("GtkBox".to_string(), "middle".to_string()),
                ("GtkLabel".to_string(), "last".to_string()),
            ]
        );
    }

    #[test]
    fn test_property_nested_container_is_converted() {
        let result = process(
            r#"<interface>
  <object class="GtkWindow">
    <property name="child">
      <object class="AdwStatusPage">
        <property name="title">Empty</property>
      </object>
    </property>
  </object>
</interface>"#,
        );

        let window = result.first_object().unwrap();
        let nested = props::property_object(window, "child").unwrap();
        assert_eq!(nested.class(), Some("GtkBox"));
    }

    #[test]
    fn test_property_nested_row_is_not_converted() {
        // the property-nested pass uses the narrower rule set on purpose
        let result = process(
            r#"<interface>
  <object class="GtkWindow">
    <property name="child">
      <object class="AdwActionRow">
        <property name="title">Should stay</property>
      </object>
    </property>
  </object>
</interface>"#,
        );

        let window = result.first_object().unwrap();
        let nested = props::property_object(window, "child").unwrap();
        assert_eq!(nested.class(), Some("AdwActionRow"));
    }

    #[test]
    fn test_unwrap_applies_after_substitution_at_each_level() {
        // a stack page whose promoted child is itself a convertible widget
        let result = process(
            r#"<interface>
  <object class="AdwViewStack">
    <child>
      <object class="AdwViewStackPage">
        <property name="name">main</property>
        <property name="child">
          <object class="AdwStatusPage">
            <property name="title">Ready</property>
          </object>
        </property>
      </object>
    </child>
  </object>
</interface>"#,
        );

        let stack = result.first_object().unwrap();
        let child = stack.first_element_named("child").unwrap();
        assert_eq!(child.attr("type"), Some("main"));
        // the status page nested in the wrapper's child property was
        // converted by the property-nested pass before unwrapping
        assert_eq!(child.first_object().unwrap().class(), Some("GtkBox"));
    }

    #[test]
    fn test_idempotent_on_converted_output() {
        let source = r#"<interface>
  <object class="AdwClamp">
    <property name="maximum-size">400</property>
    <child>
      <object class="AdwSwitchRow" id="s">
        <property name="title">Toggle</property>
      </object>
    </child>
  </object>
</interface>"#;
        let once = process(source);
        let mut twice = once.clone();
        process_element(&mut twice);
        assert_eq!(once, twice);
    }
}
