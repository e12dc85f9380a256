//! Configuration for the command bar.
//!
//! A bar is described by a KDL (v2) document. Every node is optional; missing
//! nodes keep the defaults from [`BarConfig::default`].
//!
//! ```kdl
//! // Label language for catalog controls
//! language "en"
//!
//! // Requested controls, in bar order ("split" draws a divider)
//! controls "undo" "redo" "split" "bold" "italic" "media"
//!
//! font-sizes 12 14 16 18
//!
//! font-families {
//!     family "Arial" "Arial, Helvetica, sans-serif"
//!     family "Georgia" "Georgia, serif"
//! }
//!
//! colors "#000000" "#ffffff"
//! temp-colors "#ff0000"
//! emojis "😀" "👍"
//!
//! // Media kinds the host can insert; omitted kinds are unavailable
//! media image=#true video=#false audio=#false
//! ```
//!
//! Unknown nodes and unusable entries are reported as [`ConfigWarning`]s
//! rather than failing the parse.

pub mod error;
mod parse;

use std::path::Path;

pub use error::{ConfigError, ConfigWarning, Result};
pub use parse::parse_config_str;
use quill_primitives::MediaAssets;

/// One entry of the font family picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamilyOption {
	/// Display name (`"Georgia"`).
	pub name: String,
	/// CSS font-family value applied to the selection.
	pub family: String,
}

impl FontFamilyOption {
	pub fn new(name: impl Into<String>, family: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			family: family.into(),
		}
	}
}

/// Parsed command bar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
	/// Label language identifier.
	pub language: String,
	/// Requested control ids, in bar order.
	pub controls: Vec<String>,
	/// Font size picker options, in pixels.
	pub font_sizes: Vec<u16>,
	/// Font family picker options.
	pub font_families: Vec<FontFamilyOption>,
	/// Text color palette.
	pub colors: Vec<String>,
	/// Recently used colors shown next to the palette.
	pub temp_colors: Vec<String>,
	/// Emoji picker options.
	pub emojis: Vec<String>,
	/// Media kinds available to the media picker.
	pub media: MediaAssets,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

/// Control ids shown when the configuration does not list any.
pub const DEFAULT_CONTROLS: &[&str] = &[
	"undo",
	"redo",
	"split",
	"font-size",
	"font-family",
	"text-color",
	"bold",
	"italic",
	"underline",
	"strike-through",
	"superscript",
	"subscript",
	"emoji",
	"split",
	"text-align",
	"split",
	"headings",
	"list_ul",
	"list_ol",
	"blockquote",
	"code",
	"split",
	"link",
	"split",
	"media",
	"clear",
];

pub const DEFAULT_FONT_SIZES: &[u16] = &[12, 14, 16, 18, 20, 24, 28, 30, 32, 36, 40, 48, 56, 64, 72, 96, 120, 144];

pub const DEFAULT_COLORS: &[&str] = &[
	"#000000", "#333333", "#666666", "#999999", "#cccccc", "#ffffff", "#61a951", "#16a085", "#07a9fe", "#003ba5", "#8e44ad", "#f32784",
	"#c0392b", "#d35400", "#f39c12", "#fdda00",
];

pub const DEFAULT_EMOJIS: &[&str] = &[
	"😀", "😁", "😂", "😃", "😉", "😋", "😎", "😍", "😘", "🙂", "🤔", "😐", "😴", "😛", "😢", "😭", "😡", "👍", "👎", "👏", "🙏", "💪", "🎉", "❤",
];

fn default_font_families() -> Vec<FontFamilyOption> {
	vec![
		FontFamilyOption::new("Arial", "Arial, Helvetica, sans-serif"),
		FontFamilyOption::new("Georgia", "Georgia, serif"),
		FontFamilyOption::new("Impact", "Impact, serif"),
		FontFamilyOption::new("Monospace", "\"Courier New\", Courier, monospace"),
		FontFamilyOption::new("Tahoma", "tahoma, arial, 'Hiragino Sans GB', sans-serif"),
	]
}

impl Default for BarConfig {
	fn default() -> Self {
		Self {
			language: "en".to_string(),
			controls: DEFAULT_CONTROLS.iter().map(|s| s.to_string()).collect(),
			font_sizes: DEFAULT_FONT_SIZES.to_vec(),
			font_families: default_font_families(),
			colors: DEFAULT_COLORS.iter().map(|s| s.to_string()).collect(),
			temp_colors: Vec::new(),
			emojis: DEFAULT_EMOJIS.iter().map(|s| s.to_string()).collect(),
			media: MediaAssets::ALL,
			warnings: Vec::new(),
		}
	}
}

/// Loads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<BarConfig> {
	let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let config = parse_config_str(&input)?;
	for warning in &config.warnings {
		tracing::warn!(path = %path.display(), %warning, "Command bar config warning");
	}
	Ok(config)
}
