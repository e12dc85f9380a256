use crate::block::BlockKey;


/// A position inside a block, measured in characters from the block start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPoint {
	pub block: BlockKey,
	pub offset: usize,
}

impl BlockPoint {
	pub fn new(block: impl Into<BlockKey>, offset: usize) -> Self {
		Self {
			block: block.into(),
			offset,
		}
	}
}

/// A selection defined by anchor and focus positions.
///
/// The anchor is the fixed end and the focus is the end that moves while
/// extending. Block order is owned by the host content tree, so the range
/// records its own direction instead of deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionRange {
	/// The fixed end of the selection.
	pub anchor: BlockPoint,
	/// The moving end of the selection (caret position).
	pub focus: BlockPoint,
	/// Whether the focus precedes the anchor in document order.
	pub backward: bool,
	/// Whether the editor view currently has focus.
	pub has_focus: bool,
}

impl SelectionRange {
	/// Creates a forward selection from anchor to focus.
	pub fn new(anchor: BlockPoint, focus: BlockPoint) -> Self {
		Self {
			anchor,
			focus,
			backward: false,
			has_focus: false,
		}
	}

	/// Creates a collapsed selection (caret) at the given position.
	pub fn caret(point: BlockPoint) -> Self {
		Self::new(point.clone(), point)
	}

	/// Marks the selection as running from focus back to anchor.
	pub fn backward(mut self) -> Self {
		self.backward = true;
		self
	}

	pub fn focused(mut self, has_focus: bool) -> Self {
		self.has_focus = has_focus;
		self
	}

	/// Returns the earlier end in document order.
	pub fn start(&self) -> &BlockPoint {
		if self.backward { &self.focus } else { &self.anchor }
	}

	/// Returns the later end in document order.
	pub fn end(&self) -> &BlockPoint {
		if self.backward { &self.anchor } else { &self.focus }
	}

	/// Key of the block holding the selection start.
	pub fn start_key(&self) -> &BlockKey {
		&self.start().block
	}

	/// Returns true if anchor and focus coincide.
	pub fn is_collapsed(&self) -> bool {
		self.anchor == self.focus
	}
}
