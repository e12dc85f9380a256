//! Per-language control catalogs.
//!
//! Catalogs are built once per [`Language`] on first use and shared after
//! that. Lookup is total: an unknown language gets the English catalog.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::controls::{BUILTIN_CONTROLS, ControlDescriptor};
use crate::languages::Language;

/// Ordered control descriptors for one language.
pub type Catalog = Arc<[ControlDescriptor]>;

static CATALOGS: LazyLock<FxHashMap<Language, Catalog>> = LazyLock::new(|| {
	Language::iter()
		.map(|lang| (lang, build(lang)))
		.collect()
});

fn build(language: Language) -> Catalog {
	let labels = language.labels();
	BUILTIN_CONTROLS.iter().map(|def| def.describe(labels)).collect()
}

/// Returns the catalog for a language identifier.
pub fn lookup(language: &str) -> Catalog {
	catalog_for(Language::resolve(language))
}

/// Returns the catalog for a parsed language.
pub fn catalog_for(language: Language) -> Catalog {
	match CATALOGS.get(&language) {
		Some(catalog) => Arc::clone(catalog),
		None => build(language),
	}
}

/// Finds the descriptor whose id matches `id`, ignoring case.
pub fn find_control<'a>(catalog: &'a [ControlDescriptor], id: &str) -> Option<&'a ControlDescriptor> {
	catalog.iter().find(|descriptor| descriptor.matches_id(id))
}
