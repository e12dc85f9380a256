use smallvec::SmallVec;


/// Set of inline style names active at the selection (`"BOLD"`, `"ITALIC"`, ...).
///
/// Style names are compared exactly. Insertion order is kept so callers that
/// render the set get a stable result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyleSet {
	styles: SmallVec<[String; 4]>,
}

impl InlineStyleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true if `style` is in the set.
	pub fn contains(&self, style: &str) -> bool {
		self.styles.iter().any(|s| s == style)
	}

	/// Adds `style`, returning false if it was already present.
	pub fn insert(&mut self, style: impl Into<String>) -> bool {
		let style = style.into();
		if self.contains(&style) {
			return false;
		}
		self.styles.push(style);
		true
	}

	/// Removes `style`, returning true if it was present.
	pub fn remove(&mut self, style: &str) -> bool {
		let before = self.styles.len();
		self.styles.retain(|s| s != style);
		self.styles.len() != before
	}

	/// Adds `style` if absent, removes it otherwise.
	pub fn toggle(&mut self, style: &str) {
		if !self.remove(style) {
			self.styles.push(style.to_string());
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.styles.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.styles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.styles.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for InlineStyleSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut set = Self::new();
		for style in iter {
			set.insert(style);
		}
		set
	}
}

impl<S: Into<String>> Extend<S> for InlineStyleSet {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for style in iter {
			self.insert(style);
		}
	}
}
