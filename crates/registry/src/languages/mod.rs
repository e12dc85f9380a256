//! Supported languages and bundled control labels.

mod labels;

pub use labels::{LabelKey, Labels};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A language the catalog ships labels for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Language {
	#[default]
	#[strum(to_string = "en")]
	English,
	#[strum(to_string = "zh")]
	Chinese,
	#[strum(to_string = "zh-hant")]
	TraditionalChinese,
}

impl Language {
	/// Parses a language identifier, falling back to English for unknown ones.
	pub fn resolve(language: &str) -> Self {
		match language.trim().parse() {
			Ok(lang) => lang,
			Err(_) => {
				tracing::debug!(language, fallback = %Self::default(), "Unknown catalog language");
				Self::default()
			}
		}
	}

	/// Bundled label table for this language.
	pub fn labels(self) -> &'static Labels {
		match self {
			Self::English => &labels::EN,
			Self::Chinese => &labels::ZH,
			Self::TraditionalChinese => &labels::ZH_HANT,
		}
	}
}
