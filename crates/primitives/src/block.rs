use std::borrow::Borrow;
use std::fmt;

/// Opaque key identifying a block in the host content tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(pub String);

impl BlockKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for BlockKey {
	fn from(key: &str) -> Self {
		Self::new(key)
	}
}

/// Paragraph-level classification of a block (`"blockquote"`, `"header-one"`, ...).
///
/// Block types are host-defined strings; only the unstyled default is named here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockType(String);

impl BlockType {
	/// Type of a block with no paragraph formatting.
	pub const UNSTYLED: &'static str = "unstyled";

	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn unstyled() -> Self {
		Self::new(Self::UNSTYLED)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_unstyled(&self) -> bool {
		self.0 == Self::UNSTYLED
	}
}

impl Default for BlockType {
	fn default() -> Self {
		Self::unstyled()
	}
}

impl Borrow<str> for BlockType {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for BlockType {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for BlockType {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl From<&str> for BlockType {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl fmt::Display for BlockType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
