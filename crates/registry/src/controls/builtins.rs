//! Builtin control table, in default bar order.

use super::{ControlDef, ControlKind};
use crate::languages::LabelKey;

const fn def(id: &'static str, kind: ControlKind, command: Option<&'static str>, text: &'static str, label: LabelKey) -> ControlDef {
	ControlDef {
		id,
		kind,
		command,
		text,
		label,
	}
}

/// Every control the catalog knows, in the order a default bar shows them.
pub static BUILTIN_CONTROLS: &[ControlDef] = &[
	def("undo", ControlKind::EditorMethod, Some("undo"), "↶", LabelKey::Undo),
	def("redo", ControlKind::EditorMethod, Some("redo"), "↷", LabelKey::Redo),
	def(
		"remove-styles",
		ControlKind::EditorMethod,
		Some("removeSelectionInlineStyles"),
		"⌧",
		LabelKey::RemoveStyles,
	),
	def("font-size", ControlKind::FontSize, None, "", LabelKey::FontSize),
	def("font-family", ControlKind::FontFamily, None, "", LabelKey::FontFamily),
	def("text-color", ControlKind::TextColor, None, "", LabelKey::TextColor),
	def("bold", ControlKind::InlineStyle, Some("BOLD"), "B", LabelKey::Bold),
	def("italic", ControlKind::InlineStyle, Some("ITALIC"), "I", LabelKey::Italic),
	def("underline", ControlKind::InlineStyle, Some("UNDERLINE"), "U", LabelKey::Underline),
	def(
		"strike-through",
		ControlKind::InlineStyle,
		Some("STRIKETHROUGH"),
		"S",
		LabelKey::StrikeThrough,
	),
	def("superscript", ControlKind::InlineStyle, Some("SUPERSCRIPT"), "x²", LabelKey::Superscript),
	def("subscript", ControlKind::InlineStyle, Some("SUBSCRIPT"), "x₂", LabelKey::Subscript),
	def("emoji", ControlKind::Emoji, None, "☺", LabelKey::Emoji),
	def("headings", ControlKind::Headings, None, "", LabelKey::Headings),
	def(
		"list_ul",
		ControlKind::BlockType,
		Some("unordered-list-item"),
		"•",
		LabelKey::UnorderedList,
	),
	def("list_ol", ControlKind::BlockType, Some("ordered-list-item"), "1.", LabelKey::OrderedList),
	def("blockquote", ControlKind::BlockType, Some("blockquote"), "❝", LabelKey::Blockquote),
	def("code", ControlKind::BlockType, Some("code-block"), "</>", LabelKey::Code),
	def("link", ControlKind::Link, None, "", LabelKey::Link),
	def("split", ControlKind::Split, None, "", LabelKey::Split),
	def("text-align", ControlKind::TextAlign, None, "", LabelKey::TextAlign),
	def("media", ControlKind::Media, None, "▣", LabelKey::Media),
	def("clear", ControlKind::EditorMethod, Some("clearEditorContent"), "⌫", LabelKey::Clear),
];
