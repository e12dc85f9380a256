//! Control descriptor types.

mod builtins;

use std::borrow::Cow;

pub use builtins::BUILTIN_CONTROLS;
use quill_invocation::{CommandProtocol, ControlCommand};
use strum::{AsRefStr, Display, EnumString};

use crate::languages::{LabelKey, Labels};

/// Requested id that always renders as a divider, catalog or not.
pub const SPLIT_ID: &str = "split";

/// What a control does when activated and how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ControlKind {
	/// Button toggling an inline style; active while the style applies.
	InlineStyle,
	/// Button toggling a block type; active while the start block has that type.
	BlockType,
	/// Button calling a named controller method.
	#[strum(to_string = "editor-state-method")]
	EditorMethod,
	/// Heading picker.
	Headings,
	/// Text color picker.
	TextColor,
	/// Font size picker.
	FontSize,
	/// Font family picker.
	FontFamily,
	/// Emoji picker.
	Emoji,
	/// Link editor.
	Link,
	/// Text alignment picker.
	TextAlign,
	/// Button opening the media picker overlay.
	Media,
	/// Divider.
	Split,
}

impl ControlKind {
	/// Command protocol for simple button kinds; `None` for pickers, media, and dividers.
	pub const fn protocol(self) -> Option<CommandProtocol> {
		match self {
			Self::InlineStyle => Some(CommandProtocol::InlineStyle),
			Self::BlockType => Some(CommandProtocol::BlockType),
			Self::EditorMethod => Some(CommandProtocol::EditorMethod),
			_ => None,
		}
	}

	/// Returns true for kinds rendered through a picker sub-widget.
	pub const fn is_picker(self) -> bool {
		matches!(
			self,
			Self::Headings | Self::TextColor | Self::FontSize | Self::FontFamily | Self::Emoji | Self::Link | Self::TextAlign
		)
	}
}

/// Static definition of a builtin control.
///
/// Labels are resolved per language when a catalog is built.
#[derive(Debug, Clone, Copy)]
pub struct ControlDef {
	/// Case-insensitive control id (`"bold"`, `"list_ul"`).
	pub id: &'static str,
	pub kind: ControlKind,
	/// Command argument for simple button kinds.
	pub command: Option<&'static str>,
	/// Button glyph, independent of language.
	pub text: &'static str,
	/// Label used as title (and as text when `text` is empty).
	pub label: LabelKey,
}

impl ControlDef {
	/// Builds the descriptor for one language's labels.
	pub fn describe(&self, labels: &Labels) -> ControlDescriptor {
		let title = labels.get(self.label);
		let text = if self.text.is_empty() { title } else { self.text };
		ControlDescriptor {
			id: Cow::Borrowed(self.id),
			kind: self.kind,
			command: self.command.map(Cow::Borrowed),
			text: Cow::Borrowed(text),
			title: Cow::Borrowed(title),
		}
	}
}

/// Immutable catalog entry describing one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
	pub id: Cow<'static, str>,
	pub kind: ControlKind,
	pub command: Option<Cow<'static, str>>,
	pub text: Cow<'static, str>,
	pub title: Cow<'static, str>,
}

impl ControlDescriptor {
	/// Creates a descriptor with no command and the title doubling as text.
	pub fn new(id: impl Into<Cow<'static, str>>, kind: ControlKind, title: impl Into<Cow<'static, str>>) -> Self {
		let title = title.into();
		Self {
			id: id.into(),
			kind,
			command: None,
			text: title.clone(),
			title,
		}
	}

	pub fn with_command(mut self, command: impl Into<Cow<'static, str>>) -> Self {
		self.command = Some(command.into());
		self
	}

	/// Returns true if `id` names this control, ignoring case.
	pub fn matches_id(&self, id: &str) -> bool {
		ids_match(&self.id, id)
	}

	/// The command this control dispatches on activation, if it is a simple button.
	pub fn command(&self) -> Option<ControlCommand> {
		let protocol = self.kind.protocol()?;
		let command = self.command.as_deref()?;
		Some(ControlCommand::new(protocol, command))
	}
}

/// Compares control ids the way hosts write them: case-insensitively.
pub(crate) fn ids_match(a: &str, b: &str) -> bool {
	a.chars()
		.flat_map(char::to_lowercase)
		.eq(b.chars().flat_map(char::to_lowercase))
}
