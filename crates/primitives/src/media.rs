/// Which kinds of media the host can insert.
///
/// The media control is only offered when at least one kind is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MediaAssets {
	pub image: bool,
	pub video: bool,
	pub audio: bool,
}

impl MediaAssets {
	/// No media kinds available.
	pub const NONE: Self = Self {
		image: false,
		video: false,
		audio: false,
	};

	/// All media kinds available.
	pub const ALL: Self = Self {
		image: true,
		video: true,
		audio: true,
	};

	pub const fn images_only() -> Self {
		Self {
			image: true,
			video: false,
			audio: false,
		}
	}

	/// Returns true if any media kind is available.
	pub const fn any(&self) -> bool {
		self.image || self.video || self.audio
	}
}
