//! Toggle state for simple controls.
//!
//! Only inline-style and block-type buttons carry a boolean state at this
//! layer. Pickers, links, media and addons own whatever highlight they show.

use quill_primitives::{BlockType, InlineStyleSet};
use quill_registry::{ControlDescriptor, ControlKind};

const BUTTON_CLASS: &str = "control-item button";
const ACTIVE_BUTTON_CLASS: &str = "control-item button active";

/// Returns true if the control's toggle is on for the current selection.
pub fn is_active(descriptor: &ControlDescriptor, inline_styles: &InlineStyleSet, block_type: &BlockType) -> bool {
	let Some(command) = descriptor.command.as_deref() else {
		return false;
	};
	match descriptor.kind {
		ControlKind::InlineStyle => inline_styles.contains(command),
		ControlKind::BlockType => block_type == command,
		_ => false,
	}
}

/// Class name for a catalog button.
pub fn class_name(active: bool) -> &'static str {
	if active { ACTIVE_BUTTON_CLASS } else { BUTTON_CLASS }
}
