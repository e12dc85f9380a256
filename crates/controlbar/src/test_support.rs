//! Controller and document doubles for unit tests.

use quill_primitives::{BlockKey, BlockPoint, BlockType, DocumentState, InlineStyleSet, SelectionRange};
use quill_registry::EditorMethod;

use crate::controller::{DocumentController, MethodOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
	ToggleStyle(String),
	ToggleBlock(String),
	Invoke(EditorMethod),
}

/// Controller that records every call and keeps a minimal style/block state.
#[derive(Debug, Default)]
pub(crate) struct RecordingController {
	pub styles: InlineStyleSet,
	pub block_type: BlockType,
	pub calls: Vec<Call>,
	pub focus_calls: usize,
	pub supported: Vec<EditorMethod>,
}

impl RecordingController {
	pub fn supporting(methods: &[EditorMethod]) -> Self {
		Self {
			supported: methods.to_vec(),
			..Self::default()
		}
	}
}

impl DocumentController for RecordingController {
	fn toggle_style(&mut self, style: &str) {
		self.styles.toggle(style);
		self.calls.push(Call::ToggleStyle(style.to_string()));
	}

	fn toggle_block(&mut self, block_type: &str) {
		self.block_type = if self.block_type == block_type {
			BlockType::unstyled()
		} else {
			BlockType::new(block_type)
		};
		self.calls.push(Call::ToggleBlock(block_type.to_string()));
	}

	fn block_type(&self) -> BlockType {
		self.block_type.clone()
	}

	fn has_style(&self, style: &str) -> bool {
		self.styles.contains(style)
	}

	fn focus(&mut self) {
		self.focus_calls += 1;
	}

	fn invoke(&mut self, method: EditorMethod) -> MethodOutcome {
		if !self.supported.contains(&method) {
			return MethodOutcome::Unsupported;
		}
		self.calls.push(Call::Invoke(method));
		MethodOutcome::Applied
	}
}

/// Single-block document with a caret in block `"a"`.
#[derive(Debug, Clone, Default)]
pub(crate) struct TestDoc {
	pub styles: InlineStyleSet,
	pub block_type: BlockType,
}

impl TestDoc {
	pub fn new(styles: &[&str], block_type: &str) -> Self {
		Self {
			styles: styles.iter().copied().collect(),
			block_type: BlockType::new(block_type),
		}
	}
}

impl DocumentState for TestDoc {
	fn selection(&self) -> SelectionRange {
		SelectionRange::caret(BlockPoint::new("a", 0))
	}

	fn inline_styles(&self) -> InlineStyleSet {
		self.styles.clone()
	}

	fn block_type_at(&self, key: &BlockKey) -> Option<BlockType> {
		(key.as_str() == "a").then(|| self.block_type.clone())
	}
}
