//! KDL parsing for command bar configuration.

use kdl::{KdlDocument, KdlNode, KdlValue};
use quill_primitives::MediaAssets;

use crate::error::{ConfigError, ConfigWarning, Result};
use crate::{BarConfig, FontFamilyOption};

const KNOWN_NODES: &[&str] = &[
	"language",
	"controls",
	"font-sizes",
	"font-families",
	"colors",
	"temp-colors",
	"emojis",
	"media",
];

/// Parse a KDL string into a [`BarConfig`].
///
/// Nodes that are absent keep their defaults. Non-fatal issues are collected
/// in `BarConfig::warnings`.
pub fn parse_config_str(input: &str) -> Result<BarConfig> {
	let doc: KdlDocument = input.parse()?;
	let mut config = BarConfig::default();
	let mut warnings = Vec::new();

	if let Some(node) = doc.get("language") {
		config.language = node
			.get(0)
			.and_then(KdlValue::as_string)
			.ok_or_else(|| invalid("language", "a string"))?
			.to_string();
	}

	if let Some(node) = doc.get("controls") {
		config.controls = string_args(node, "controls", &mut warnings);
	}

	if let Some(node) = doc.get("font-sizes") {
		config.font_sizes = parse_font_sizes(node)?;
	}

	if let Some(node) = doc.get("font-families") {
		config.font_families = parse_font_families(node)?;
	}

	if let Some(node) = doc.get("colors") {
		config.colors = parse_colors(node, "colors")?;
	}

	if let Some(node) = doc.get("temp-colors") {
		config.temp_colors = parse_colors(node, "temp-colors")?;
	}

	if let Some(node) = doc.get("emojis") {
		config.emojis = string_args(node, "emojis", &mut warnings);
	}

	if let Some(node) = doc.get("media") {
		config.media = parse_media(node)?;
	}

	for node in doc.nodes() {
		let name = node.name().value();
		if !KNOWN_NODES.contains(&name) {
			warnings.push(ConfigWarning::UnknownNode(name.to_string()));
		}
	}

	config.warnings = warnings;
	Ok(config)
}

fn invalid(node: &str, expected: &'static str) -> ConfigError {
	ConfigError::InvalidValue {
		node: node.to_string(),
		expected,
	}
}

/// Positional string arguments; other values are skipped with a warning.
fn string_args(node: &KdlNode, name: &'static str, warnings: &mut Vec<ConfigWarning>) -> Vec<String> {
	let mut values = Vec::new();
	for entry in node.entries().iter().filter(|e| e.name().is_none()) {
		match entry.value().as_string() {
			Some(value) => values.push(value.to_string()),
			None => warnings.push(ConfigWarning::IgnoredEntry {
				node: name,
				entry: entry.value().to_string(),
			}),
		}
	}
	values
}

fn parse_font_sizes(node: &KdlNode) -> Result<Vec<u16>> {
	node.entries()
		.iter()
		.filter(|e| e.name().is_none())
		.map(|entry| {
			entry
				.value()
				.as_integer()
				.and_then(|size| u16::try_from(size).ok())
				.filter(|size| *size > 0)
				.ok_or_else(|| invalid("font-sizes", "positive integers"))
		})
		.collect()
}

fn parse_font_families(node: &KdlNode) -> Result<Vec<FontFamilyOption>> {
	let Some(children) = node.children() else {
		return Ok(Vec::new());
	};

	children
		.nodes()
		.iter()
		.filter(|n| n.name().value() == "family")
		.map(|family| {
			let name = family
				.get(0)
				.and_then(KdlValue::as_string)
				.ok_or_else(|| ConfigError::MissingField("family name".into()))?;
			let css = family
				.get(1)
				.and_then(KdlValue::as_string)
				.ok_or_else(|| ConfigError::MissingField(format!("font-family value for '{name}'")))?;
			Ok(FontFamilyOption::new(name, css))
		})
		.collect()
}

fn parse_colors(node: &KdlNode, name: &str) -> Result<Vec<String>> {
	node.entries()
		.iter()
		.filter(|e| e.name().is_none())
		.map(|entry| {
			let value = entry.value().as_string().ok_or_else(|| invalid(name, "color strings"))?;
			if is_hex_color(value) {
				Ok(value.to_ascii_lowercase())
			} else {
				Err(ConfigError::InvalidColor(value.to_string()))
			}
		})
		.collect()
}

/// Accepts `#rgb` and `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
	let Some(hex) = value.strip_prefix('#') else {
		return false;
	};
	matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Media kinds not named on the node are unavailable.
fn parse_media(node: &KdlNode) -> Result<MediaAssets> {
	let flag = |key: &str| -> Result<bool> {
		match node.get(key) {
			None => Ok(false),
			Some(value) => value.as_bool().ok_or_else(|| invalid("media", "boolean properties")),
		}
	};
	Ok(MediaAssets {
		image: flag("image")?,
		video: flag("video")?,
		audio: flag("audio")?,
	})
}
