//! Structural conversion of libadwaita widgets to GTK3 equivalents
//!
//! Architecture
//!
//!     - WidgetClass (registry.rs): closed enum mapping source widget
//!       class names to conversion functions; unknown classes pass through
//!     - One converter module per widget family, each a pure function of
//!       one source `<object>` returning its replacement
//!     - unwrap.rs: wrapper/page nodes that disappear, promoting their
//!       sole child at the parent's scope
//!     - walker.rs: depth-first traversal that applies the registry, the
//!       unwrap rules, and the (narrower) property-nested pass
//!     - rename.rs: flat one-to-one rewrites with no structural change
//!
//!     The file structure:
//!     .
//!     ├── registry.rs        # WidgetClass dispatch
//!     ├── walker.rs          # traversal and in-place replacement
//!     ├── unwrap.rs          # stack/leaflet page unwrapping
//!     ├── rename.rs          # class renames, requires, dropped props
//!     ├── toolbar_view.rs    # AdwToolbarView
//!     ├── status_page.rs     # AdwStatusPage
//!     ├── clamp.rs           # AdwClamp
//!     ├── preferences.rs     # AdwPreferencesPage / AdwPreferencesGroup
//!     ├── rows.rs            # AdwActionRow / AdwButtonRow / AdwSwitchRow
//!     └── window_title.rs    # AdwWindowTitle

pub mod clamp;
pub mod preferences;
pub mod registry;
pub mod rename;
pub mod rows;
pub mod status_page;
pub mod toolbar_view;
pub mod unwrap;
pub mod walker;
pub mod window_title;

pub use registry::WidgetClass;
pub use walker::process_element;
