//! Document controller seam.

use quill_primitives::BlockType;
use quill_registry::EditorMethod;

/// Outcome of invoking a named method on a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOutcome {
	/// The controller ran the method.
	Applied,
	/// The controller does not provide this method.
	Unsupported,
}

/// The external collaborator that owns document mutation and caret focus.
///
/// The bar only routes commands here; argument validation and undo history
/// belong to the controller.
pub trait DocumentController {
	/// Toggles an inline style over the selection.
	fn toggle_style(&mut self, style: &str);

	/// Toggles the block type of the selected blocks.
	fn toggle_block(&mut self, block_type: &str);

	/// Block type at the selection start.
	fn block_type(&self) -> BlockType;

	/// Returns true if the style applies at the selection.
	fn has_style(&self, style: &str) -> bool;

	/// Restores focus (and the native caret) to the editor view.
	fn focus(&mut self);

	/// Runs a zero-argument controller method.
	///
	/// Controllers that omit a method report [`MethodOutcome::Unsupported`];
	/// the default provides none.
	fn invoke(&mut self, method: EditorMethod) -> MethodOutcome {
		let _ = method;
		MethodOutcome::Unsupported
	}
}
