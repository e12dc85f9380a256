//! Named controller methods.
//!
//! `editor-state-method` controls name a controller method by string. The
//! names resolve through a fixed index to an [`EditorMethod`]; anything not in
//! the index is not a method this bar can call.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// A zero-argument controller operation reachable from a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum EditorMethod {
	Undo,
	Redo,
	RemoveSelectionInlineStyles,
	ClearEditorContent,
	InsertHorizontalLine,
	IncreaseIndent,
	DecreaseIndent,
	SelectAll,
	Blur,
}

impl EditorMethod {
	/// Canonical method name (`"removeSelectionInlineStyles"`).
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Extra names accepted for this method.
	fn aliases(self) -> &'static [&'static str] {
		match self {
			Self::ClearEditorContent => &["clear"],
			Self::RemoveSelectionInlineStyles => &["removeStyles"],
			_ => &[],
		}
	}
}

/// O(1) method lookup index by name and alias.
static EDITOR_METHOD_INDEX: LazyLock<FxHashMap<&'static str, EditorMethod>> = LazyLock::new(|| {
	let mut map = FxHashMap::default();
	for method in EditorMethod::iter() {
		map.insert(method.name(), method);
		for &alias in method.aliases() {
			map.insert(alias, method);
		}
	}
	map
});

/// Finds a controller method by name or alias. Names are case-sensitive.
pub fn find_editor_method(name: &str) -> Option<EditorMethod> {
	EDITOR_METHOD_INDEX.get(name).copied()
}

/// Returns all known controller methods.
pub fn all_editor_methods() -> impl Iterator<Item = EditorMethod> {
	EditorMethod::iter()
}
