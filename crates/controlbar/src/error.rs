use thiserror::Error;

use crate::addon::AddonKind;

/// Faults that abort rendering a bar.
///
/// Unknown control ids, unknown methods and missing media never surface here;
/// they degrade to absent controls. Only caller contract violations do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	/// An addon descriptor lacks a field its kind requires.
	#[error("addon control #{index} ({kind}) is missing {missing}")]
	MalformedAddon {
		/// Position of the addon in the caller's list.
		index: usize,
		kind: AddonKind,
		/// Name of the missing field.
		missing: &'static str,
	},
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
