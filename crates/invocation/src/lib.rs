//! Canonical command types for command bar dispatch.
//!
//! Every control activation (catalog button, heading picker change) is
//! converted into a [`ControlCommand`] before it reaches the dispatcher.

use strum::{AsRefStr, Display, EnumString};

/// Which command protocol a control activation goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandProtocol {
	/// Toggle a character-level style over the selection.
	InlineStyle,
	/// Toggle the paragraph type of the selected blocks.
	BlockType,
	/// Call a named zero-argument controller method.
	#[strum(to_string = "editor-state-method")]
	EditorMethod,
}

/// A control activation routed to the document controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlCommand {
	/// Toggle an inline style (e.g. `BOLD`).
	InlineStyle(String),
	/// Toggle a block type (e.g. `blockquote`).
	BlockType(String),
	/// Invoke a controller method by name (e.g. `undo`).
	///
	/// The name is resolved at dispatch time; names the controller does not
	/// know are ignored.
	EditorMethod(String),
}

impl ControlCommand {
	pub fn inline_style(style: impl Into<String>) -> Self {
		Self::InlineStyle(style.into())
	}

	pub fn block_type(block_type: impl Into<String>) -> Self {
		Self::BlockType(block_type.into())
	}

	pub fn editor_method(name: impl Into<String>) -> Self {
		Self::EditorMethod(name.into())
	}

	/// Builds a command from a protocol tag and its argument.
	pub fn new(protocol: CommandProtocol, command: impl Into<String>) -> Self {
		match protocol {
			CommandProtocol::InlineStyle => Self::InlineStyle(command.into()),
			CommandProtocol::BlockType => Self::BlockType(command.into()),
			CommandProtocol::EditorMethod => Self::EditorMethod(command.into()),
		}
	}

	pub fn protocol(&self) -> CommandProtocol {
		match self {
			Self::InlineStyle(_) => CommandProtocol::InlineStyle,
			Self::BlockType(_) => CommandProtocol::BlockType,
			Self::EditorMethod(_) => CommandProtocol::EditorMethod,
		}
	}

	/// The command argument (style name, block type, or method name).
	pub fn argument(&self) -> &str {
		match self {
			Self::InlineStyle(s) | Self::BlockType(s) | Self::EditorMethod(s) => s,
		}
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		format!("{}:{}", self.protocol(), self.argument())
	}
}
