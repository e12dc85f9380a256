//! Caller-supplied addon controls.
//!
//! Addons render after catalog controls and are entirely caller-owned: no
//! toggle state, no catalog lookup. Descriptors are validated when rendered; a
//! descriptor missing what its kind needs is a caller bug and fails the render.

use std::fmt;
use std::rc::Rc;

use strum::{AsRefStr, Display};

use crate::error::{RenderError, Result};
use crate::picker::ViewAnchor;

/// Kind of addon control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AddonKind {
	Split,
	Button,
	Dropdown,
}

/// Callback run with the current document state when an addon button is activated.
pub type AddonCallback<S> = Rc<dyn Fn(&S)>;

/// Dropdown content and presentation.
#[derive(Debug, Clone)]
pub struct AddonDropdown<B> {
	/// Pre-built content shown when the dropdown opens.
	pub body: B,
	pub show_arrow: bool,
	pub hover_title: Option<String>,
}

/// One caller-supplied control.
pub struct AddonControl<S, B = ()> {
	pub kind: AddonKind,
	pub text: String,
	pub title: String,
	pub class_name: String,
	/// Required for [`AddonKind::Button`].
	pub on_activate: Option<AddonCallback<S>>,
	/// Required for [`AddonKind::Dropdown`].
	pub dropdown: Option<AddonDropdown<B>>,
}

impl<S, B> AddonControl<S, B> {
	fn bare(kind: AddonKind, text: String) -> Self {
		Self {
			kind,
			text,
			title: String::new(),
			class_name: String::new(),
			on_activate: None,
			dropdown: None,
		}
	}

	pub fn split() -> Self {
		Self::bare(AddonKind::Split, String::new())
	}

	pub fn button(text: impl Into<String>, on_activate: impl Fn(&S) + 'static) -> Self {
		Self {
			on_activate: Some(Rc::new(on_activate)),
			..Self::bare(AddonKind::Button, text.into())
		}
	}

	pub fn dropdown(text: impl Into<String>, body: B) -> Self {
		Self {
			dropdown: Some(AddonDropdown {
				body,
				show_arrow: true,
				hover_title: None,
			}),
			..Self::bare(AddonKind::Dropdown, text.into())
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = class_name.into();
		self
	}

	/// Sets dropdown presentation; ignored for other kinds.
	pub fn with_dropdown_style(mut self, show_arrow: bool, hover_title: Option<String>) -> Self {
		if let Some(dropdown) = &mut self.dropdown {
			dropdown.show_arrow = show_arrow;
			dropdown.hover_title = hover_title;
		}
		self
	}
}

impl<S, B> fmt::Debug for AddonControl<S, B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AddonControl")
			.field("kind", &self.kind)
			.field("text", &self.text)
			.field("class_name", &self.class_name)
			.field("on_activate", &self.on_activate.is_some())
			.field("dropdown", &self.dropdown.is_some())
			.finish()
	}
}

/// Rendered addon button.
pub struct AddonButtonElement<'a, S> {
	pub key: usize,
	/// Position in the caller's addon list.
	pub index: usize,
	pub text: &'a str,
	pub title: &'a str,
	pub class_name: String,
	on_activate: &'a AddonCallback<S>,
}

impl<S> AddonButtonElement<'_, S> {
	pub(crate) fn activate(&self, state: &S) {
		(self.on_activate)(state)
	}
}

impl<S> fmt::Debug for AddonButtonElement<'_, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AddonButtonElement")
			.field("key", &self.key)
			.field("index", &self.index)
			.field("text", &self.text)
			.field("class_name", &self.class_name)
			.finish_non_exhaustive()
	}
}

/// Rendered addon dropdown; opening and positioning belong to the dropdown widget.
#[derive(Debug)]
pub struct AddonDropdownElement<'a, B> {
	pub key: usize,
	pub index: usize,
	pub caption: &'a str,
	pub class_name: String,
	pub show_arrow: bool,
	pub hover_title: Option<&'a str>,
	pub body: &'a B,
	pub view_anchor: Option<ViewAnchor>,
}

/// Rendered addon.
#[derive(Debug)]
pub enum AddonElement<'a, S, B> {
	Divider { key: usize },
	Button(AddonButtonElement<'a, S>),
	Dropdown(AddonDropdownElement<'a, B>),
}

fn join_class(base: &str, extra: &str) -> String {
	if extra.is_empty() {
		base.to_string()
	} else {
		format!("{base} {extra}")
	}
}

/// Renders addons in order. Keys continue after the `key_offset` catalog slots.
pub fn render_addons<'a, S, B>(
	addons: &'a [AddonControl<S, B>],
	key_offset: usize,
	view_anchor: Option<ViewAnchor>,
) -> Result<Vec<AddonElement<'a, S, B>>> {
	addons
		.iter()
		.enumerate()
		.map(|(index, addon)| {
			let key = key_offset + index;
			let malformed = |missing| RenderError::MalformedAddon {
				index,
				kind: addon.kind,
				missing,
			};
			Ok(match addon.kind {
				AddonKind::Split => AddonElement::Divider { key },
				AddonKind::Button => {
					let on_activate = addon.on_activate.as_ref().ok_or_else(|| malformed("on_activate"))?;
					AddonElement::Button(AddonButtonElement {
						key,
						index,
						text: &addon.text,
						title: &addon.title,
						class_name: join_class("control-item button", &addon.class_name),
						on_activate,
					})
				}
				AddonKind::Dropdown => {
					let dropdown = addon.dropdown.as_ref().ok_or_else(|| malformed("dropdown body"))?;
					AddonElement::Dropdown(AddonDropdownElement {
						key,
						index,
						caption: &addon.text,
						class_name: join_class("control-item dropdown", &addon.class_name),
						show_arrow: dropdown.show_arrow,
						hover_title: dropdown.hover_title.as_deref(),
						body: &dropdown.body,
						view_anchor,
					})
				}
			})
		})
		.collect()
}
