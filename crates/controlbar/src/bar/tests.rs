use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use quill_registry::EditorMethod;

use super::*;
use crate::addon::AddonKind;
use crate::error::RenderError;
use crate::overlay::OverlayState;
use crate::test_support::{Call, RecordingController, TestDoc};

type Input = BarInput<TestDoc>;

fn input(controls: &[&str]) -> Input {
	Input::default().with_controls(controls.iter().copied()).with_media(MediaAssets::NONE)
}

fn bar() -> ControlBar<TestDoc> {
	ControlBar::new(|_: TestDoc| {})
}

/// Condensed view of the catalog part of a render: `(key, id, active)` for
/// buttons, `(key, "|", false)` for dividers.
fn catalog_items<B>(elements: &[BarElement<'_, TestDoc, B>]) -> Vec<(usize, String, bool)> {
	elements
		.iter()
		.filter_map(|element| match element {
			BarElement::Divider { key } => Some((*key, "|".to_string(), false)),
			BarElement::Button(button) => Some((button.key, button.descriptor.id.to_string(), button.active)),
			BarElement::Picker(picker) => Some((picker.key, picker.descriptor.id.to_string(), false)),
			_ => None,
		})
		.collect()
}

fn button<'e, B>(elements: &'e [BarElement<'_, TestDoc, B>], id: &str) -> &'e ControlButton {
	elements
		.iter()
		.find_map(|element| match element {
			BarElement::Button(button) if button.descriptor.id == id => Some(button),
			_ => None,
		})
		.unwrap_or_else(|| panic!("no button {id}"))
}

#[test]
fn media_picker_renders_first_then_requested_order() {
	let doc = TestDoc::new(&["ITALIC"], "blockquote");
	let reader = RecordingController::default();
	let input = input(&["bold", "italic", "split", "blockquote", "unknown-id"]);
	let elements = bar().render(&input, &doc, &reader).unwrap();

	assert!(matches!(elements[0], BarElement::MediaPicker(_)));
	assert_eq!(
		catalog_items(&elements),
		[
			(0, "bold".to_string(), false),
			(1, "italic".to_string(), true),
			(2, "|".to_string(), false),
			(3, "blockquote".to_string(), true),
		]
	);
	assert_eq!(button(&elements, "italic").class_name, "control-item button active");
	assert_eq!(button(&elements, "bold").class_name, "control-item button");
}

#[test]
fn italic_activation_toggles_once_and_defers_focus() {
	let doc = TestDoc::new(&[], "unstyled");
	let reader = RecordingController::default();
	let input = input(&["italic"]);
	let mut bar = bar();
	let action = {
		let elements = bar.render(&input, &doc, &reader).unwrap();
		button(&elements, "italic").action.clone()
	};
	assert_eq!(action, ControlAction::Dispatch(ControlCommand::inline_style("ITALIC")));

	let mut controller = RecordingController::default();
	assert_eq!(bar.activate(&action, &mut controller), DispatchOutcome::Applied);
	assert_eq!(controller.calls, [Call::ToggleStyle("ITALIC".into())]);
	assert_eq!(controller.focus_calls, 0);
	assert_eq!(bar.deferred().pending_focus(), 1);

	assert_eq!(bar.run_deferred(&mut controller), 1);
	assert_eq!(controller.focus_calls, 1);
	assert!(bar.deferred().is_empty());
}

#[test]
fn editor_methods_render_as_buttons() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let input = input(&["undo", "remove-styles", "clear"]);
	let elements = bar().render(&input, &doc, &reader).unwrap();

	let actions: Vec<ControlAction> = ["undo", "remove-styles", "clear"]
		.into_iter()
		.map(|id| button(&elements, id).action.clone())
		.collect();
	assert_eq!(
		actions,
		[
			ControlAction::Dispatch(ControlCommand::editor_method("undo")),
			ControlAction::Dispatch(ControlCommand::editor_method("removeSelectionInlineStyles")),
			ControlAction::Dispatch(ControlCommand::editor_method("clearEditorContent")),
		]
	);
	assert!(catalog_items(&elements).iter().all(|(_, _, active)| !active));
}

#[test]
fn unsupported_method_is_a_no_op_that_still_restores_focus() {
	let mut bar = bar();
	let mut controller = RecordingController::supporting(&[EditorMethod::Redo]);

	let outcome = bar.activate(&ControlAction::Dispatch(ControlCommand::editor_method("undo")), &mut controller);
	assert_eq!(outcome, DispatchOutcome::Ignored);
	assert!(controller.calls.is_empty());
	assert_eq!(bar.deferred().pending_focus(), 1);

	bar.activate(&ControlAction::Dispatch(ControlCommand::editor_method("redo")), &mut controller);
	assert_eq!(controller.calls, [Call::Invoke(EditorMethod::Redo)]);
}

#[test]
fn media_control_needs_assets_and_opens_overlay() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let mut bar = bar();

	let without = input(&["media"]);
	let elements = bar.render(&without, &doc, &reader).unwrap();
	assert!(catalog_items(&elements).is_empty());

	let with = input(&["media"]).with_media(MediaAssets::images_only());
	let action = {
		let elements = bar.render(&with, &doc, &reader).unwrap();
		let media = button(&elements, "media");
		assert_eq!(media.action, ControlAction::OpenMediaPicker);
		media.action.clone()
	};

	let mut controller = RecordingController::default();
	assert_eq!(bar.media_overlay().state(), OverlayState::Hidden);
	assert_eq!(bar.activate(&action, &mut controller), DispatchOutcome::Applied);
	assert_eq!(bar.media_overlay().state(), OverlayState::Visible);
	assert_eq!(bar.activate(&action, &mut controller), DispatchOutcome::Ignored);
	assert!(bar.deferred().is_empty());

	let elements = bar.render(&with, &doc, &reader).unwrap();
	let BarElement::MediaPicker(props) = &elements[0] else {
		panic!("expected media picker first, got {:?}", elements[0]);
	};
	assert_eq!(props.overlay, OverlayState::Visible);
	assert_eq!(props.media, MediaAssets::images_only());

	assert!(bar.close_media_picker(CloseReason::Commit));
	assert!(!bar.close_media_picker(CloseReason::Cancel));
	assert_eq!(bar.media_overlay().state(), OverlayState::Hidden);
}

#[test]
fn media_picker_stays_hidden_without_assets() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let mut controller = RecordingController::default();
	let mut bar = bar();

	assert_eq!(bar.activate(&ControlAction::OpenMediaPicker, &mut controller), DispatchOutcome::Ignored);

	let without = input(&["media"]);
	bar.render(&without, &doc, &reader).unwrap();
	assert_eq!(bar.activate(&ControlAction::OpenMediaPicker, &mut controller), DispatchOutcome::Ignored);
	assert_eq!(bar.media_overlay().state(), OverlayState::Hidden);
	assert!(bar.deferred().is_empty());

	let with = input(&["media"]).with_media(MediaAssets {
		audio: true,
		..MediaAssets::NONE
	});
	bar.render(&with, &doc, &reader).unwrap();
	assert_eq!(bar.activate(&ControlAction::OpenMediaPicker, &mut controller), DispatchOutcome::Applied);
	assert!(bar.media_overlay().is_open());
}

#[test]
fn pickers_carry_kind_specific_props() {
	let doc = TestDoc::new(&[], "header-two");
	let reader = RecordingController::default();
	let mut input = input(&["headings", "font-size", "font-family", "emoji", "text-color", "link", "text-align"]);
	input.font_sizes = vec![12, 16];
	input.temp_colors = vec!["#123456".into()];
	input.view_anchor = Some(ViewAnchor(3));
	let elements = bar().render(&input, &doc, &reader).unwrap();

	let pickers: Vec<&PickerElement<'_, TestDoc>> = elements
		.iter()
		.filter_map(|element| match element {
			BarElement::Picker(picker) => Some(picker),
			_ => None,
		})
		.collect();
	assert_eq!(pickers.len(), 7);

	assert_eq!(pickers[0].kind(), ControlKind::Headings);
	assert_eq!(
		pickers[0].spec,
		PickerSpec::Headings {
			current: BlockType::new("header-two")
		}
	);
	assert_eq!(
		pickers[1].spec,
		PickerSpec::FontSize {
			options: &[12, 16],
			default_caption: "Font Size".into(),
		}
	);
	assert!(matches!(
		&pickers[2].spec,
		PickerSpec::FontFamily { default_caption, .. } if default_caption == "Font Family"
	));
	assert!(matches!(
		&pickers[3].spec,
		PickerSpec::Emoji { default_caption, .. } if default_caption == "☺"
	));
	assert!(matches!(
		&pickers[4].spec,
		PickerSpec::TextColor { temp_colors, .. } if temp_colors.len() == 1
	));
	assert_eq!(pickers[5].spec, PickerSpec::Link);
	assert_eq!(pickers[6].spec, PickerSpec::TextAlign);

	for picker in &pickers {
		assert_eq!(picker.common.view_anchor, Some(ViewAnchor(3)));
		assert_eq!(picker.common.snapshot.block_type, BlockType::new("header-two"));
		assert_eq!(picker.common.language, Language::English);
	}
}

#[test]
fn heading_selection_dispatches_block_type() {
	let mut bar = bar();
	let mut controller = RecordingController::default();

	bar.select_heading("header-one", &mut controller);
	assert_eq!(controller.block_type, BlockType::new("header-one"));
	assert_eq!(controller.calls, [Call::ToggleBlock("header-one".into())]);
	assert_eq!(bar.deferred().pending_focus(), 1);
}

#[test]
fn unknown_language_falls_back_to_english_titles() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let mut input = input(&["bold"]);
	input.language = "tlh".into();
	let elements = bar().render(&input, &doc, &reader).unwrap();
	assert_eq!(button(&elements, "bold").descriptor.title, "Bold");

	input.language = "ZH".into();
	let elements = bar().render(&input, &doc, &reader).unwrap();
	assert_eq!(button(&elements, "bold").descriptor.title, "加粗");
}

#[test]
fn addons_follow_catalog_with_offset_keys() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);

	let input: BarInput<TestDoc, &str> = BarInput::default()
		.with_controls(["bold", "unknown"])
		.with_media(MediaAssets::NONE)
		.with_addons(vec![
			AddonControl::split(),
			AddonControl::button("Word count", move |doc: &TestDoc| sink.borrow_mut().push(doc.block_type.clone())),
			AddonControl::dropdown("More", "panel"),
		]);
	let mut bar = bar();
	let elements = bar.render(&input, &doc, &reader).unwrap();

	assert_eq!(elements.len(), 5);
	assert!(matches!(elements[1], BarElement::Button(ControlButton { key: 0, .. })));
	assert!(matches!(elements[2], BarElement::Divider { key: 2 }));
	let BarElement::AddonButton(addon) = &elements[3] else {
		panic!("expected addon button, got {:?}", elements[3]);
	};
	assert_eq!(addon.key, 3);
	let BarElement::AddonDropdown(dropdown) = &elements[4] else {
		panic!("expected addon dropdown, got {:?}", elements[4]);
	};
	assert_eq!((dropdown.key, *dropdown.body), (4, "panel"));

	bar.activate_addon(addon, &doc);
	assert_eq!(*seen.borrow(), [BlockType::unstyled()]);
	assert_eq!(bar.deferred().pending_focus(), 1);
}

#[test]
fn malformed_addon_fails_render() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let mut broken = AddonControl::button("Broken", |_: &TestDoc| {});
	broken.on_activate = None;
	let input = input(&["bold"]).with_addons(vec![broken]);

	let err = bar().render(&input, &doc, &reader).unwrap_err();
	assert_eq!(
		err,
		RenderError::MalformedAddon {
			index: 0,
			kind: AddonKind::Button,
			missing: "on_activate",
		}
	);
}

#[test]
fn document_state_is_forwarded_once_then_focus_restored() {
	let received = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&received);
	let mut bar = ControlBar::new(move |doc: TestDoc| sink.borrow_mut().push(doc));

	bar.apply_document_state(TestDoc::new(&["BOLD"], "code-block"));
	assert_eq!(received.borrow().len(), 1);
	assert_eq!(received.borrow()[0].block_type, BlockType::new("code-block"));
	assert_eq!(bar.deferred().pending_focus(), 1);

	let mut controller = RecordingController::default();
	bar.run_deferred(&mut controller);
	assert_eq!(controller.focus_calls, 1);
}

#[test]
fn input_from_config_copies_options() {
	let config = BarConfig {
		language: "zh".into(),
		controls: vec!["bold".into()],
		font_sizes: vec![10],
		..BarConfig::default()
	};
	let input: Input = BarInput::from_config(&config);
	assert_eq!(input.language, "zh");
	assert_eq!(input.controls, ["bold"]);
	assert_eq!(input.font_sizes, [10]);
	assert!(input.addons.is_empty());
	assert_eq!(input.media, config.media);
}

#[test]
fn text_color_picker_reads_controller_and_applies_color() {
	let doc = TestDoc::new(&["BOLD"], "unstyled");
	let mut controller = RecordingController::default();
	controller.styles.insert("BOLD");
	let mut bar = bar();
	let input = input(&["text-color"]);

	let command = {
		let elements = bar.render(&input, &doc, &controller).unwrap();
		let picker = elements
			.iter()
			.find_map(|element| match element {
				BarElement::Picker(picker) => Some(picker),
				_ => None,
			})
			.expect("text color picker");
		assert_eq!(picker.kind(), ControlKind::TextColor);
		assert!(picker.common.controller.has_style("BOLD"));
		assert_eq!(picker.common.controller.block_type(), BlockType::unstyled());
		ControlCommand::inline_style("COLOR-FF0000")
	};

	assert_eq!(bar.apply_picker_command(&command, &mut controller), DispatchOutcome::Applied);
	assert_eq!(controller.calls, [Call::ToggleStyle("COLOR-FF0000".into())]);
	assert!(controller.has_style("COLOR-FF0000"));
	assert_eq!(bar.deferred().pending_focus(), 1);
}

#[test]
fn pickers_can_request_a_render() {
	let doc = TestDoc::default();
	let reader = RecordingController::default();
	let requests = Rc::new(RefCell::new(0));
	let counter = Rc::clone(&requests);
	let mut input = input(&["emoji", "link"]);
	input.force_render = Some(Rc::new(move || *counter.borrow_mut() += 1));

	let elements = bar().render(&input, &doc, &reader).unwrap();
	for element in &elements {
		if let BarElement::Picker(picker) = element {
			assert!(picker.common.request_render());
		}
	}
	assert_eq!(*requests.borrow(), 2);

	input.force_render = None;
	let elements = bar().render(&input, &doc, &reader).unwrap();
	let BarElement::MediaPicker(props) = &elements[0] else {
		panic!("expected media picker first");
	};
	assert!(!props.common.request_render());
}

#[test]
fn host_work_shares_the_deferred_queue() {
	let mut bar = bar();
	let mut controller = RecordingController::default();

	bar.select_heading("header-three", &mut controller);
	let seq = bar.deferred_mut().schedule_focus();
	assert_eq!(seq, 1);
	assert_eq!(bar.deferred().pending_focus(), 2);

	assert_eq!(bar.run_deferred(&mut controller), 2);
	assert_eq!(controller.focus_calls, 2);
}
