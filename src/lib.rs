//! Convert GTK4/libadwaita UI definition files to GTK3
//!
//!     Libadwaita's composite widgets (AdwToolbarView, AdwStatusPage,
//!     AdwActionRow, ...) have no direct GTK3 equivalents. This crate
//!     rewrites GtkBuilder `.ui` documents from the modern vocabulary
//!     into the older, more primitive one, rebuilding each composite from
//!     plain boxes, labels and list rows while preserving layout,
//!     sibling order and interactive behavior.
//!
//! Architecture
//!
//!     - xml: owned element tree, quick-xml parser and serializer, and
//!       the property accessors for the builder grammar
//!     - convert: the structural core — widget class registry, one
//!       converter per widget family, wrapper unwrapping, the tree
//!       walker, and the flat rename pass
//!     - pipeline: per-document orchestration with atomic file writes
//!     - discover / report: batch collaborators used by the binary
//!
//!     This is a pure lib: it powers the adw2gtk binary but is shell
//!     agnostic — no printing, no env vars, no exit codes. Degraded
//!     conversions (an expected property missing from a source widget)
//!     are surfaced through the `log` facade, never as errors.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ConvertError taxonomy
//!     ├── xml
//!     │   ├── mod.rs          # Document / Element / XmlNode
//!     │   ├── parser.rs       # text → tree
//!     │   ├── serializer.rs   # tree → text
//!     │   └── props.rs        # property accessors
//!     ├── convert             # see convert/mod.rs
//!     ├── pipeline.rs         # convert_str / convert_file / check_file
//!     ├── discover.rs         # .ui file enumeration
//!     └── report.rs           # batch tally and per-file lines
//!
//! Unknown widget classes pass through unchanged by design, which also
//! makes the conversion idempotent: the GTK3 target classes have no
//! registry entries, so re-running the tool on converted output is a
//! no-op.

pub mod convert;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod xml;

pub use error::{ConvertError, ConvertResult};
pub use pipeline::{check_file, convert_file, convert_str};
