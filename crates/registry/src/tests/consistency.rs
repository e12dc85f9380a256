use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::controls::{BUILTIN_CONTROLS, ControlKind, SPLIT_ID};
use crate::{all_editor_methods, find_editor_method};
use crate::languages::Language;

#[test]
fn control_ids_are_unique_ignoring_case() {
	let mut seen = HashSet::new();
	for def in BUILTIN_CONTROLS {
		assert!(seen.insert(def.id.to_lowercase()), "Duplicate control id '{}'", def.id);
	}
}

#[test]
fn simple_controls_carry_commands() {
	for def in BUILTIN_CONTROLS {
		if def.kind.protocol().is_some() {
			assert!(def.command.is_some(), "Control '{}' has no command", def.id);
		} else {
			assert!(def.command.is_none(), "Control '{}' has an unused command", def.id);
		}
	}
}

#[test]
fn editor_method_commands_resolve() {
	for def in BUILTIN_CONTROLS.iter().filter(|d| d.kind == ControlKind::EditorMethod) {
		let command = def.command.unwrap_or_default();
		assert!(
			find_editor_method(command).is_some(),
			"Control '{}' names unknown method '{command}'",
			def.id
		);
	}
}

#[test]
fn split_is_the_only_divider() {
	let splits: Vec<_> = BUILTIN_CONTROLS.iter().filter(|d| d.kind == ControlKind::Split).map(|d| d.id).collect();
	assert_eq!(splits, [SPLIT_ID]);
}

#[test]
fn every_language_titles_every_visible_control() {
	for lang in Language::iter() {
		for def in BUILTIN_CONTROLS.iter().filter(|d| d.kind != ControlKind::Split) {
			let descriptor = def.describe(lang.labels());
			assert!(!descriptor.title.is_empty(), "Control '{}' has no {lang} title", def.id);
			assert!(!descriptor.text.is_empty(), "Control '{}' has no {lang} text", def.id);
		}
	}
}

#[test]
fn every_editor_method_resolves_by_its_own_name() {
	let mut names = HashSet::new();
	for method in all_editor_methods() {
		assert!(names.insert(method.name()), "Duplicate method name '{}'", method.name());
		assert_eq!(find_editor_method(method.name()), Some(method));
	}
}
