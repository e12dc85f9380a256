//! Control catalog for the command bar.
//!
//! - [`controls`] - Control descriptors, kinds, and the builtin control table
//! - [`catalog`] - Per-language catalog lookup
//! - [`languages`] - Supported languages and their label tables
//! - [`methods`] - Named controller methods reachable from `editor-state-method` controls

pub mod catalog;
pub mod controls;
pub mod languages;
pub mod methods;

pub use catalog::{Catalog, catalog_for, find_control, lookup};
pub use controls::{BUILTIN_CONTROLS, ControlDef, ControlDescriptor, ControlKind, SPLIT_ID};
pub use languages::{LabelKey, Labels, Language};
pub use methods::{EditorMethod, all_editor_methods, find_editor_method};

#[cfg(test)]
mod tests;
