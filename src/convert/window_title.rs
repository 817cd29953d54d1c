//! AdwWindowTitle → GtkLabel
//!
//! The title property (including any binding attributes on it) becomes
//! the label text; the `title` style class approximates the header-bar
//! typography. Remaining properties pass through so expression bindings
//! keep working; `subtitle` has no single-label equivalent and is dropped.

use crate::xml::props;
use crate::xml::Element;

pub fn convert_window_title(window_title: &Element) -> Element {
    let mut label = Element::object("GtkLabel");
    if let Some(id) = window_title.id() {
        label.set_attr("id", id);
    }

    match props::find_property(window_title, "title") {
        Some(title_prop) => label.push_element(props::copy_property_as(title_prop, "label")),
        None => log::warn!("AdwWindowTitle has no title property"),
    }

    label.push_element(Element::style_block("title"));

    for prop in window_title.elements_named("property") {
        if matches!(prop.attr("name"), Some("title") | Some("subtitle")) {
            continue;
        }
        label.push_element(prop.clone());
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parser::parse_document;

    fn convert(source: &str) -> Element {
        let doc = parse_document(source).unwrap();
        convert_window_title(doc.root().unwrap())
    }

    #[test]
    fn test_title_becomes_label() {
        let result = convert(
            r#"<object class="AdwWindowTitle" id="wt">
  <property name="title">My App</property>
  <property name="subtitle">v2</property>
</object>"#,
        );

        assert_eq!(result.class(), Some("GtkLabel"));
        assert_eq!(result.id(), Some("wt"));
        assert_eq!(props::property_text(&result, "label"), Some("My App"));
        assert!(props::find_property(&result, "subtitle").is_none());

        let style = result.first_element_named("style").unwrap();
        assert_eq!(
            style.first_element_named("class").unwrap().attr("name"),
            Some("title")
        );
    }

    #[test]
    fn test_binding_attributes_survive_on_label() {
        let result = convert(
            r#"<object class="AdwWindowTitle">
  <property name="title" bind-source="doc" bind-property="name">Untitled</property>
</object>"#,
        );
        let label = props::find_property(&result, "label").unwrap();
        assert_eq!(label.attr("bind-source"), Some("doc"));
        assert_eq!(label.attr("bind-property"), Some("name"));
    }

    #[test]
    fn test_unrelated_properties_pass_through() {
        let result = convert(
            r#"<object class="AdwWindowTitle">
  <property name="title">My App</property>
  <property name="visible">False</property>
</object>"#,
        );
        assert_eq!(props::property_text(&result, "visible"), Some("False"));
    }
}
