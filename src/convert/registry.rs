//! Widget class registry
//!
//! A closed enumeration of the source widget classes that need structural
//! conversion, mapped to their converter functions at compile time. A
//! class name with no variant here is left untouched by the walker — the
//! pass-through behavior is by design, so custom widgets and already
//! converted GTK3 classes survive a pass unchanged.

use crate::convert::{clamp, preferences, rows, status_page, toolbar_view, window_title};
use crate::xml::Element;

/// Source widget classes with a structural conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetClass {
    ToolbarView,
    StatusPage,
    Clamp,
    PreferencesPage,
    PreferencesGroup,
    ActionRow,
    ButtonRow,
    SwitchRow,
    WindowTitle,
}

impl WidgetClass {
    /// Look up a source class name. `None` means pass-through.
    pub fn from_class(name: &str) -> Option<Self> {
        match name {
            "AdwToolbarView" => Some(WidgetClass::ToolbarView),
            "AdwStatusPage" => Some(WidgetClass::StatusPage),
            "AdwClamp" => Some(WidgetClass::Clamp),
            "AdwPreferencesPage" => Some(WidgetClass::PreferencesPage),
            "AdwPreferencesGroup" => Some(WidgetClass::PreferencesGroup),
            "AdwActionRow" => Some(WidgetClass::ActionRow),
            "AdwButtonRow" => Some(WidgetClass::ButtonRow),
            "AdwSwitchRow" => Some(WidgetClass::SwitchRow),
            "AdwWindowTitle" => Some(WidgetClass::WindowTitle),
            _ => None,
        }
    }

    /// Whether this class is also substituted when its object appears
    /// nested inside a `<property>` value.
    ///
    /// Deliberately narrower than the full child-slot set: only the
    /// container-like classes legally show up as property values (e.g. a
    /// toolbar view as a window's `content`). Row and preferences classes
    /// only ever live in child slots and are excluded here; see the walker
    /// docs for why the two passes are kept separate.
    pub fn allowed_in_property(self) -> bool {
        matches!(
            self,
            WidgetClass::ToolbarView
                | WidgetClass::StatusPage
                | WidgetClass::Clamp
                | WidgetClass::WindowTitle
        )
    }

    /// Run the converter for this class over one source `<object>`.
    pub fn convert(self, source: &Element) -> Element {
        match self {
            WidgetClass::ToolbarView => toolbar_view::convert_toolbar_view(source),
            WidgetClass::StatusPage => status_page::convert_status_page(source),
            WidgetClass::Clamp => clamp::convert_clamp(source),
            WidgetClass::PreferencesPage => preferences::convert_preferences_page(source),
            WidgetClass::PreferencesGroup => preferences::convert_preferences_group(source),
            // button rows have no dedicated GTK3 shape; the action row
            // layout covers them
            WidgetClass::ActionRow | WidgetClass::ButtonRow => rows::convert_action_row(source),
            WidgetClass::SwitchRow => rows::convert_switch_row(source),
            WidgetClass::WindowTitle => window_title::convert_window_title(source),
        }
    }
}
