//! Error types for configuration parsing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required field is missing from the configuration.
	#[error("missing required field: {0}")]
	MissingField(String),

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// A node argument has the wrong type or range.
	#[error("invalid value for '{node}': expected {expected}")]
	InvalidValue {
		/// Node holding the bad value.
		node: String,
		/// What the node accepts.
		expected: &'static str,
	},
}

/// Non-fatal issue found while parsing configuration.
///
/// Warnings are collected in [`BarConfig::warnings`](crate::BarConfig::warnings)
/// and do not prevent the configuration from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A top-level node this crate does not read.
	UnknownNode(String),
	/// An entry that was skipped (e.g. a non-string control id).
	IgnoredEntry {
		/// Node the entry belongs to.
		node: &'static str,
		/// Rendered entry value.
		entry: String,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownNode(name) => write!(f, "unknown node '{name}' will be ignored"),
			Self::IgnoredEntry { node, entry } => write!(f, "entry {entry} in '{node}' will be ignored"),
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
