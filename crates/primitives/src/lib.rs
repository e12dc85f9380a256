//! Read-view types over a rich-text document: selections, blocks, inline styles, and media.

/// Block keys and paragraph-level block types.
pub mod block;
/// Host document state seam and per-cycle snapshots.
pub mod document;
/// Media asset availability flags.
pub mod media;
/// Block-addressed selection ranges.
pub mod selection;
/// Character-level inline style sets.
pub mod style;

pub use block::{BlockKey, BlockType};
pub use document::{DocumentSnapshot, DocumentState};
pub use media::MediaAssets;
pub use selection::{BlockPoint, SelectionRange};
pub use style::InlineStyleSet;
