//! Host document seam.
//!
//! The command bar never owns document content. Each render cycle it asks the
//! host for a [`DocumentSnapshot`], which is dropped at the end of the cycle so
//! toggle states always reflect the latest edit.

use crate::block::{BlockKey, BlockType};
use crate::selection::SelectionRange;
use crate::style::InlineStyleSet;

/// Read access to the host's live document state.
pub trait DocumentState {
	/// Current selection.
	fn selection(&self) -> SelectionRange;

	/// Inline styles applying at the current selection.
	fn inline_styles(&self) -> InlineStyleSet;

	/// Looks up a block's type in the content tree.
	///
	/// Returns `None` when the key does not name a block.
	fn block_type_at(&self, key: &BlockKey) -> Option<BlockType>;
}

/// Per-cycle view of the document that toggle evaluation reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
	pub selection: SelectionRange,
	pub inline_styles: InlineStyleSet,
	/// Type of the block holding the selection start.
	pub block_type: BlockType,
}

impl DocumentSnapshot {
	/// Captures the current selection, inline styles, and start block type.
	///
	/// A selection start that names no block reads as [`BlockType::UNSTYLED`].
	pub fn capture<S: DocumentState + ?Sized>(state: &S) -> Self {
		let selection = state.selection();
		let block_type = state
			.block_type_at(selection.start_key())
			.unwrap_or_default();
		Self {
			inline_styles: state.inline_styles(),
			selection,
			block_type,
		}
	}
}
