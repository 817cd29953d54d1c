//! AdwStatusPage → centered vertical GtkBox
//!
//! The generated parts appear in a fixed order — icon (or spinner), title,
//! description, then any pre-existing children — and each part is emitted
//! only when its source property is present.

use crate::xml::props;
use crate::xml::Element;

const ICON_PIXEL_SIZE: &str = "128";
const SPINNER_SIZE: &str = "32";

pub fn convert_status_page(status_page: &Element) -> Element {
    let mut gtk_box = Element::object("GtkBox");
    if let Some(id) = status_page.id() {
        gtk_box.set_attr("id", id);
    }
    gtk_box.add_property("orientation", "vertical");
    gtk_box.add_property("valign", "center");
    gtk_box.add_property("halign", "center");

    for style in status_page.elements_named("style") {
        gtk_box.push_element(style.clone());
    }

    if let Some(icon_prop) = props::find_property(status_page, "icon-name") {
        let mut image = Element::object("GtkImage");
        image.push_element(props::copy_property_as(icon_prop, "icon-name"));
        image.add_property("pixel-size", ICON_PIXEL_SIZE);
        gtk_box.push_element(wrap_in_child(image));
    }

    if props::find_property(status_page, "paintable").is_some() {
        if spinner_paintable(status_page).is_some() {
            let mut spinner = Element::object("GtkSpinner");
            spinner.add_property("active", "True");
            spinner.add_property("width-request", SPINNER_SIZE);
            spinner.add_property("height-request", SPINNER_SIZE);
            gtk_box.push_element(wrap_in_child(spinner));
        } else {
            log::warn!("AdwStatusPage paintable is not a spinner; dropping it");
        }
    }

    match props::find_property(status_page, "title") {
        Some(title_prop) => {
            let mut label = Element::object("GtkLabel");
            label.push_element(props::copy_property_as(title_prop, "label"));
            label.push_element(Element::style_block("title-1"));
            gtk_box.push_element(wrap_in_child(label));
        }
        None => log::warn!("AdwStatusPage has no title property"),
    }

    if let Some(description_prop) = props::find_property(status_page, "description") {
        let mut label = Element::object("GtkLabel");
        label.push_element(props::copy_property_as(description_prop, "label"));
        label.add_property("wrap", "True");
        gtk_box.push_element(wrap_in_child(label));
    }

    for child in status_page.elements_named("child") {
        gtk_box.push_element(child.clone());
    }

    gtk_box
}

fn spinner_paintable(status_page: &Element) -> Option<&Element> {
    props::property_object(status_page, "paintable")
        .filter(|obj| obj.class() == Some("AdwSpinnerPaintable"))
}

fn wrap_in_child(obj: Element) -> Element {
    let mut child = Element::new("child");
    child.push_element(obj);
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parser::parse_document;

    fn convert(source: &str) -> Element {
        let doc = parse_document(source).unwrap();
        convert_status_page(doc.root().unwrap())
    }

    fn generated_classes(result: &Element) -> Vec<String> {
        result
            .elements_named("child")
            .filter_map(|child| child.first_object().and_then(Element::class))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_full_status_page_part_order() {
        let result = convert(
            r#"<object class="AdwStatusPage" id="empty">
  <property name="icon-name">folder-symbolic</property>
  <property name="title" translatable="yes">No Files</property>
  <property name="description">Drop files here</property>
  <child>
    <object class="GtkButton"/>
  </child>
</object>"#,
        );

        assert_eq!(result.class(), Some("GtkBox"));
        assert_eq!(props::property_text(&result, "valign"), Some("center"));
        assert_eq!(props::property_text(&result, "halign"), Some("center"));
        assert_eq!(
            generated_classes(&result),
            vec!["GtkImage", "GtkLabel", "GtkLabel", "GtkButton"]
        );
    }

    #[test]
    fn test_icon_gets_fixed_pixel_size() {
        let result = convert(
            r#"<object class="AdwStatusPage">
  <property name="icon-name">folder-symbolic</property>
</object>"#,
        );
        let image = result
            .elements_named("child")
            .find_map(|c| c.first_object())
            .unwrap();
        assert_eq!(props::property_text(image, "icon-name"), Some("folder-symbolic"));
        assert_eq!(props::property_text(image, "pixel-size"), Some("128"));
    }

    #[test]
    fn test_spinner_paintable_becomes_gtk_spinner() {
        let result = convert(
            r#"<object class="AdwStatusPage">
  <property name="paintable">
    <object class="AdwSpinnerPaintable">
      <property name="widget">loading_page</property>
    </object>
  </property>
  <property name="title">Loading</property>
</object>"#,
        );
        assert_eq!(generated_classes(&result), vec!["GtkSpinner", "GtkLabel"]);
        let spinner = result
            .elements_named("child")
            .find_map(|c| c.first_object())
            .unwrap();
        assert_eq!(props::property_text(spinner, "active"), Some("True"));
        assert_eq!(props::property_text(spinner, "width-request"), Some("32"));
        assert_eq!(props::property_text(spinner, "height-request"), Some("32"));
    }

    #[test]
    fn test_title_styled_as_heading_and_description_wraps() {
        let result = convert(
            r#"<object class="AdwStatusPage">
  <property name="title">No Files</property>
  <property name="description">Drop files here</property>
</object>"#,
        );
        let labels: Vec<_> = result
            .elements_named("child")
            .filter_map(|c| c.first_object())
            .collect();
        let title = labels[0];
        let description = labels[1];

        assert_eq!(props::property_text(title, "label"), Some("No Files"));
        let style = title.first_element_named("style").unwrap();
        assert_eq!(
            style.first_element_named("class").unwrap().attr("name"),
            Some("title-1")
        );

        assert_eq!(props::property_text(description, "label"), Some("Drop files here"));
        assert_eq!(props::property_text(description, "wrap"), Some("True"));
    }

    #[test]
    fn test_missing_properties_omit_parts() {
        let result = convert(r#"<object class="AdwStatusPage"/>"#);
        assert!(generated_classes(&result).is_empty());
    }

    #[test]
    fn test_translatable_attribute_survives() {
        let result = convert(
            r#"<object class="AdwStatusPage">
  <property name="title" translatable="yes">No Files</property>
</object>"#,
        );
        let label = result
            .elements_named("child")
            .find_map(|c| c.first_object())
            .unwrap();
        let label_prop = props::find_property(label, "label").unwrap();
        assert_eq!(label_prop.attr("translatable"), Some("yes"));
    }
}
