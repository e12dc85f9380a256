//! Composite bar: one render cycle and the activations that follow it.
//!
//! A cycle snapshots the host document, resolves the requested controls,
//! evaluates toggles and emits [`BarElement`]s. Activations route through the
//! dispatcher and leave focus restoration in the bar's [`DeferredQueue`] for
//! the host to drain after its own render pass.

use std::fmt;
use std::rc::Rc;

use quill_config::{BarConfig, FontFamilyOption};
use quill_invocation::ControlCommand;
use quill_primitives::{BlockType, DocumentSnapshot, DocumentState, MediaAssets};
use quill_registry::{ControlDescriptor, ControlKind, Language, catalog_for};

use crate::active::class_name;
use crate::addon::{AddonButtonElement, AddonControl, AddonDropdownElement, AddonElement, render_addons};
use crate::controller::DocumentController;
use crate::deferred::DeferredQueue;
use crate::dispatch::{DispatchOutcome, dispatch};
use crate::error::Result;
use crate::overlay::{CloseReason, MediaOverlay};
use crate::picker::{CommonProps, ForceRenderHook, MediaLibraryHandle, MediaPickerProps, PickerSpec, ViewAnchor};
use crate::resolve::{PlanItem, RenderedControl, resolve};

#[cfg(test)]
mod tests;

/// Everything the host supplies for one render cycle.
pub struct BarInput<S, B = ()> {
	/// Label language; unknown values fall back to English.
	pub language: String,
	/// Requested control ids, in bar order.
	pub controls: Vec<String>,
	/// Caller-owned controls rendered after the catalog controls.
	pub addons: Vec<AddonControl<S, B>>,
	pub colors: Vec<String>,
	pub temp_colors: Vec<String>,
	pub font_sizes: Vec<u16>,
	pub font_families: Vec<FontFamilyOption>,
	pub emojis: Vec<String>,
	pub media: MediaAssets,
	pub media_library: Option<MediaLibraryHandle>,
	pub view_anchor: Option<ViewAnchor>,
	/// Called by pickers that need the host to render again.
	pub force_render: Option<ForceRenderHook>,
}

impl<S, B> BarInput<S, B> {
	/// Builds an input from a parsed configuration, with no addons.
	pub fn from_config(config: &BarConfig) -> Self {
		Self {
			language: config.language.clone(),
			controls: config.controls.clone(),
			addons: Vec::new(),
			colors: config.colors.clone(),
			temp_colors: config.temp_colors.clone(),
			font_sizes: config.font_sizes.clone(),
			font_families: config.font_families.clone(),
			emojis: config.emojis.clone(),
			media: config.media,
			media_library: None,
			view_anchor: None,
			force_render: None,
		}
	}

	pub fn with_controls<I, T>(mut self, controls: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		self.controls = controls.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_addons(mut self, addons: Vec<AddonControl<S, B>>) -> Self {
		self.addons = addons;
		self
	}

	pub fn with_media(mut self, media: MediaAssets) -> Self {
		self.media = media;
		self
	}
}

impl<S, B> Default for BarInput<S, B> {
	fn default() -> Self {
		Self::from_config(&BarConfig::default())
	}
}

impl<S, B> fmt::Debug for BarInput<S, B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BarInput")
			.field("language", &self.language)
			.field("controls", &self.controls)
			.field("addons", &self.addons)
			.field("media", &self.media)
			.field("view_anchor", &self.view_anchor)
			.field("force_render", &self.force_render.is_some())
			.finish_non_exhaustive()
	}
}

/// What activating a catalog button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
	Dispatch(ControlCommand),
	OpenMediaPicker,
}

/// A catalog button: toggles, editor methods and the media trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
	pub key: usize,
	pub descriptor: ControlDescriptor,
	pub active: bool,
	pub class_name: &'static str,
	pub action: ControlAction,
}

/// A catalog control delegated to a picker sub-widget.
#[derive(Debug)]
pub struct PickerElement<'a, S> {
	pub key: usize,
	pub descriptor: ControlDescriptor,
	pub spec: PickerSpec<'a>,
	pub common: CommonProps<'a, S>,
}

impl<S> PickerElement<'_, S> {
	pub fn kind(&self) -> ControlKind {
		self.descriptor.kind
	}
}

/// One element of the rendered bar, in display order.
#[derive(Debug)]
pub enum BarElement<'a, S, B> {
	/// Media picker overlay host; always first.
	MediaPicker(MediaPickerProps<'a, S>),
	Divider {
		key: usize,
	},
	Button(ControlButton),
	Picker(PickerElement<'a, S>),
	AddonButton(AddonButtonElement<'a, S>),
	AddonDropdown(AddonDropdownElement<'a, B>),
}

impl<'a, S, B> From<AddonElement<'a, S, B>> for BarElement<'a, S, B> {
	fn from(element: AddonElement<'a, S, B>) -> Self {
		match element {
			AddonElement::Divider { key } => Self::Divider { key },
			AddonElement::Button(button) => Self::AddonButton(button),
			AddonElement::Dropdown(dropdown) => Self::AddonDropdown(dropdown),
		}
	}
}

/// Command bar state that lives across render cycles.
pub struct ControlBar<S> {
	media_overlay: MediaOverlay,
	/// Media kinds offered by the last render; gates the media picker.
	media: MediaAssets,
	deferred: DeferredQueue,
	on_document_change: Box<dyn FnMut(S)>,
}

impl<S> ControlBar<S> {
	/// Creates a bar that reports document replacements to `on_document_change`.
	pub fn new(on_document_change: impl FnMut(S) + 'static) -> Self {
		Self {
			media_overlay: MediaOverlay::new(),
			media: MediaAssets::NONE,
			deferred: DeferredQueue::new(),
			on_document_change: Box::new(on_document_change),
		}
	}

	/// Runs a catalog button's action.
	///
	/// Dispatched commands report their [`DispatchOutcome`]. Opening the media
	/// picker queues no focus restoration, since the picker takes focus. It
	/// reports [`DispatchOutcome::Ignored`] when the picker is already open or
	/// the last render offered no media kinds.
	pub fn activate<C: DocumentController + ?Sized>(&mut self, action: &ControlAction, controller: &mut C) -> DispatchOutcome {
		match action {
			ControlAction::Dispatch(command) => dispatch(command, controller, &mut self.deferred),
			ControlAction::OpenMediaPicker => {
				if !self.media.any() {
					tracing::trace!("Media picker unavailable without media assets");
					return DispatchOutcome::Ignored;
				}
				if self.media_overlay.open() {
					DispatchOutcome::Applied
				} else {
					DispatchOutcome::Ignored
				}
			}
		}
	}

	/// Applies a command chosen in a picker and schedules focus restoration.
	pub fn apply_picker_command<C: DocumentController + ?Sized>(&mut self, command: &ControlCommand, controller: &mut C) -> DispatchOutcome {
		dispatch(command, controller, &mut self.deferred)
	}

	/// Applies a block type chosen in the heading picker.
	pub fn select_heading<C: DocumentController + ?Sized>(&mut self, block_type: &str, controller: &mut C) -> DispatchOutcome {
		self.apply_picker_command(&ControlCommand::block_type(block_type), controller)
	}

	/// Runs an addon button's callback with the current state.
	pub fn activate_addon(&mut self, element: &AddonButtonElement<'_, S>, state: &S) {
		element.activate(state);
		tracing::trace!(index = element.index, "Activated addon control");
		self.deferred.schedule_focus();
	}

	/// Hands a new document state from a picker to the host.
	pub fn apply_document_state(&mut self, state: S) {
		(self.on_document_change)(state);
		self.deferred.schedule_focus();
	}

	/// Hides the media picker. Returns false if it was not open.
	pub fn close_media_picker(&mut self, reason: CloseReason) -> bool {
		self.media_overlay.close(reason)
	}

	pub fn media_overlay(&self) -> &MediaOverlay {
		&self.media_overlay
	}

	pub fn deferred(&self) -> &DeferredQueue {
		&self.deferred
	}

	pub fn deferred_mut(&mut self) -> &mut DeferredQueue {
		&mut self.deferred
	}

	/// Drains deferred work against the controller. Call after the host's render pass.
	pub fn run_deferred<C: DocumentController + ?Sized>(&mut self, controller: &mut C) -> usize {
		self.deferred.run(controller)
	}
}

impl<S: DocumentState> ControlBar<S> {
	/// Renders one cycle against the current document state.
	///
	/// `controller` is handed to pickers for queries only. Fails only on
	/// malformed addons.
	pub fn render<'a, B>(
		&mut self,
		input: &'a BarInput<S, B>,
		state: &'a S,
		controller: &'a dyn DocumentController,
	) -> Result<Vec<BarElement<'a, S, B>>> {
		let addons = render_addons(&input.addons, input.controls.len(), input.view_anchor)?;
		self.media = input.media;

		let language = Language::resolve(&input.language);
		let catalog = catalog_for(language);
		let snapshot = Rc::new(DocumentSnapshot::capture(state));

		let mut plan = resolve(input.controls.as_slice(), &catalog, input.media);
		plan.evaluate(&snapshot.inline_styles, &snapshot.block_type);

		let common = CommonProps {
			language,
			state,
			controller,
			snapshot: Rc::clone(&snapshot),
			view_anchor: input.view_anchor,
			force_render: input.force_render.clone(),
		};

		let mut elements = Vec::with_capacity(plan.len() + addons.len() + 1);
		elements.push(BarElement::MediaPicker(MediaPickerProps {
			media: input.media,
			library: input.media_library.as_ref(),
			overlay: self.media_overlay.state(),
			common: common.clone(),
		}));

		for (key, item) in plan.iter().enumerate() {
			match item {
				PlanItem::Skip => {}
				PlanItem::Separator => elements.push(BarElement::Divider { key }),
				PlanItem::Rendered(control) => {
					if let Some(element) = control_element(key, control, input, &snapshot.block_type, &common) {
						elements.push(element);
					}
				}
			}
		}

		tracing::trace!(
			language = %language,
			requested = input.controls.len(),
			addons = addons.len(),
			"Rendered control bar"
		);
		elements.extend(addons.into_iter().map(BarElement::from));
		Ok(elements)
	}
}

impl<S> fmt::Debug for ControlBar<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ControlBar")
			.field("media_overlay", &self.media_overlay)
			.field("media", &self.media)
			.field("deferred", &self.deferred)
			.finish_non_exhaustive()
	}
}

fn control_element<'a, S, B>(
	key: usize,
	control: &RenderedControl<'_>,
	input: &'a BarInput<S, B>,
	block_type: &BlockType,
	common: &CommonProps<'a, S>,
) -> Option<BarElement<'a, S, B>> {
	let descriptor = control.descriptor;
	if let Some(spec) = picker_spec(descriptor, input, block_type) {
		return Some(BarElement::Picker(PickerElement {
			key,
			descriptor: descriptor.clone(),
			spec,
			common: common.clone(),
		}));
	}

	let action = match descriptor.kind {
		ControlKind::Media => ControlAction::OpenMediaPicker,
		_ => {
			let Some(command) = descriptor.command() else {
				tracing::debug!(id = %descriptor.id, kind = %descriptor.kind, "Control has no command");
				return None;
			};
			ControlAction::Dispatch(command)
		}
	};
	Some(BarElement::Button(ControlButton {
		key,
		descriptor: descriptor.clone(),
		active: control.active,
		class_name: class_name(control.active),
		action,
	}))
}

fn picker_spec<'a, S, B>(descriptor: &ControlDescriptor, input: &'a BarInput<S, B>, block_type: &BlockType) -> Option<PickerSpec<'a>> {
	let spec = match descriptor.kind {
		ControlKind::Headings => PickerSpec::Headings {
			current: block_type.clone(),
		},
		ControlKind::TextColor => PickerSpec::TextColor {
			colors: &input.colors,
			temp_colors: &input.temp_colors,
		},
		ControlKind::FontSize => PickerSpec::FontSize {
			options: &input.font_sizes,
			default_caption: descriptor.title.clone(),
		},
		ControlKind::FontFamily => PickerSpec::FontFamily {
			options: &input.font_families,
			default_caption: descriptor.title.clone(),
		},
		ControlKind::Emoji => PickerSpec::Emoji {
			options: &input.emojis,
			default_caption: descriptor.text.clone(),
		},
		ControlKind::Link => PickerSpec::Link,
		ControlKind::TextAlign => PickerSpec::TextAlign,
		ControlKind::InlineStyle | ControlKind::BlockType | ControlKind::EditorMethod | ControlKind::Media | ControlKind::Split => return None,
	};
	Some(spec)
}
