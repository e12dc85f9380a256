//! Capability resolution: which requested controls appear at all.
//!
//! Resolution runs before toggle evaluation. It is the only place that decides
//! whether a control is shown; everything it skips is never evaluated.

use quill_primitives::{BlockType, InlineStyleSet, MediaAssets};
use quill_registry::{ControlDescriptor, ControlKind, SPLIT_ID, find_control};

use crate::active::is_active;

/// A catalog control that will be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedControl<'a> {
	pub descriptor: &'a ControlDescriptor,
	/// Toggle state; always false until [`RenderPlan::evaluate`] runs.
	pub active: bool,
	pub visible: bool,
}

/// Resolution result for one requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanItem<'a> {
	/// Unknown id, or a control whose prerequisites are missing.
	Skip,
	/// Divider.
	Separator,
	Rendered(RenderedControl<'a>),
}

/// Ordered resolution of a requested id list; one item per requested id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan<'a> {
	items: Vec<PlanItem<'a>>,
}

impl<'a> RenderPlan<'a> {
	pub fn items(&self) -> &[PlanItem<'a>] {
		&self.items
	}

	pub fn iter(&self) -> impl Iterator<Item = &PlanItem<'a>> {
		self.items.iter()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Rendered controls in request order.
	pub fn rendered(&self) -> impl Iterator<Item = &RenderedControl<'a>> {
		self.items.iter().filter_map(|item| match item {
			PlanItem::Rendered(control) => Some(control),
			_ => None,
		})
	}

	/// Fills in toggle state for every rendered control.
	pub fn evaluate(&mut self, inline_styles: &InlineStyleSet, block_type: &BlockType) {
		for item in &mut self.items {
			if let PlanItem::Rendered(control) = item {
				control.active = is_active(control.descriptor, inline_styles, block_type);
			}
		}
	}
}

/// Resolves requested control ids against a catalog.
///
/// Never fails: unknown ids become [`PlanItem::Skip`], since catalogs differ
/// between languages and callers may request a superset.
pub fn resolve<'a, S: AsRef<str>>(requested: &[S], catalog: &'a [ControlDescriptor], media: MediaAssets) -> RenderPlan<'a> {
	let items = requested
		.iter()
		.map(|id| resolve_one(id.as_ref(), catalog, media))
		.collect();
	RenderPlan { items }
}

fn resolve_one<'a>(id: &str, catalog: &'a [ControlDescriptor], media: MediaAssets) -> PlanItem<'a> {
	if id.eq_ignore_ascii_case(SPLIT_ID) {
		return PlanItem::Separator;
	}

	let Some(descriptor) = find_control(catalog, id) else {
		tracing::trace!(id, "Skipping control missing from catalog");
		return PlanItem::Skip;
	};

	match descriptor.kind {
		ControlKind::Split => PlanItem::Separator,
		ControlKind::Media if !media.any() => {
			tracing::trace!(id, "Skipping media control without media assets");
			PlanItem::Skip
		}
		_ => PlanItem::Rendered(RenderedControl {
			descriptor,
			active: false,
			visible: true,
		}),
	}
}
