//! Media picker overlay state.
//!
//! The media picker is the one modal collaborator the bar triggers itself.
//! The bar opens it from the media control; the picker closes it on cancel or
//! selection. The cycle repeats for the bar's lifetime.

/// Visibility of the media picker overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
	#[default]
	Hidden,
	Visible,
}

/// Why the picker closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
	/// Dismissed without choosing.
	Cancel,
	/// Media was inserted.
	Commit,
	/// The picker lost focus.
	Blur,
	/// Closed by the host.
	Forced,
}

/// State machine for the media picker overlay.
#[derive(Debug, Default)]
pub struct MediaOverlay {
	state: OverlayState,
}

impl MediaOverlay {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> OverlayState {
		self.state
	}

	pub fn is_open(&self) -> bool {
		self.state == OverlayState::Visible
	}

	/// Shows the overlay. Returns false if it was already visible.
	pub fn open(&mut self) -> bool {
		if self.is_open() {
			return false;
		}
		self.state = OverlayState::Visible;
		tracing::trace!("Media picker opened");
		true
	}

	/// Hides the overlay. Returns false if it was already hidden.
	pub fn close(&mut self, reason: CloseReason) -> bool {
		if !self.is_open() {
			return false;
		}
		self.state = OverlayState::Hidden;
		tracing::trace!(?reason, "Media picker closed");
		true
	}
}
