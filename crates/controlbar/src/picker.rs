//! Props handed to picker sub-widgets.
//!
//! Pickers are black boxes. The bar tells each one what it needs to draw and
//! leaves activation UI and highlight state to the picker itself.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use quill_config::FontFamilyOption;
use quill_primitives::{BlockType, DocumentSnapshot, MediaAssets};
use quill_registry::Language;

use crate::controller::DocumentController;
use crate::overlay::OverlayState;

/// Opaque host handle pickers use to position dropdowns against the editor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewAnchor(pub u64);

/// Host-provided media library, passed to the media picker untouched.
pub type MediaLibraryHandle = Rc<dyn Any>;

/// Host callback a picker calls to request a fresh render pass.
pub type ForceRenderHook = Rc<dyn Fn()>;

/// Props shared by every picker.
///
/// The controller is read-only here. Pickers apply their choice through
/// [`ControlBar::apply_picker_command`](crate::ControlBar::apply_picker_command)
/// or hand a whole new state to
/// [`ControlBar::apply_document_state`](crate::ControlBar::apply_document_state).
pub struct CommonProps<'a, S> {
	pub language: Language,
	/// Live host document state.
	pub state: &'a S,
	/// Controller for style and block queries.
	pub controller: &'a dyn DocumentController,
	/// Selection, inline styles and start block type for this cycle.
	pub snapshot: Rc<DocumentSnapshot>,
	pub view_anchor: Option<ViewAnchor>,
	pub force_render: Option<ForceRenderHook>,
}

impl<S> CommonProps<'_, S> {
	/// Asks the host to render again. Returns false if the host gave no hook.
	pub fn request_render(&self) -> bool {
		match &self.force_render {
			Some(hook) => {
				hook();
				true
			}
			None => false,
		}
	}
}

impl<S> Clone for CommonProps<'_, S> {
	fn clone(&self) -> Self {
		Self {
			language: self.language,
			state: self.state,
			controller: self.controller,
			snapshot: Rc::clone(&self.snapshot),
			view_anchor: self.view_anchor,
			force_render: self.force_render.clone(),
		}
	}
}

impl<S> fmt::Debug for CommonProps<'_, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommonProps")
			.field("language", &self.language)
			.field("snapshot", &self.snapshot)
			.field("view_anchor", &self.view_anchor)
			.field("force_render", &self.force_render.is_some())
			.finish_non_exhaustive()
	}
}

/// Kind-specific picker props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerSpec<'a> {
	Headings {
		/// Block type at the selection start; changes go through
		/// [`ControlBar::select_heading`](crate::ControlBar::select_heading).
		current: BlockType,
	},
	TextColor {
		colors: &'a [String],
		temp_colors: &'a [String],
	},
	FontSize {
		options: &'a [u16],
		default_caption: Cow<'static, str>,
	},
	FontFamily {
		options: &'a [FontFamilyOption],
		default_caption: Cow<'static, str>,
	},
	Emoji {
		options: &'a [String],
		default_caption: Cow<'static, str>,
	},
	Link,
	TextAlign,
}

/// Props for the media picker overlay.
pub struct MediaPickerProps<'a, S> {
	pub media: MediaAssets,
	pub library: Option<&'a MediaLibraryHandle>,
	pub overlay: OverlayState,
	pub common: CommonProps<'a, S>,
}

impl<S> fmt::Debug for MediaPickerProps<'_, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MediaPickerProps")
			.field("media", &self.media)
			.field("library", &self.library.is_some())
			.field("overlay", &self.overlay)
			.field("common", &self.common)
			.finish()
	}
}
