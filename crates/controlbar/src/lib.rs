//! Headless command bar engine for rich-text editors.
//!
//! A host describes the bar it wants as a list of control ids plus optional
//! addon controls. Each cycle [`ControlBar::render`] resolves those ids against
//! the language's control catalog, reads toggle state from a snapshot of the
//! host document and emits [`BarElement`]s for the host's view layer to draw.
//!
//! Activations flow back through [`ControlBar::activate`], which routes the
//! control's [`ControlCommand`](quill_invocation::ControlCommand) into a
//! [`DocumentController`] and queues focus restoration. The host drains that
//! queue with [`ControlBar::run_deferred`] after its render pass.
//!
//! ```ignore
//! let mut bar = ControlBar::new(|state| host.replace_state(state));
//! let input = BarInput::from_config(&config);
//! for element in bar.render(&input, &host.state, &host.controller)? {
//!     view.draw(element);
//! }
//! ```

pub mod active;
pub mod addon;
pub mod bar;
pub mod controller;
pub mod deferred;
pub mod dispatch;
pub mod error;
pub mod overlay;
pub mod picker;
pub mod resolve;
#[cfg(test)]
mod test_support;

pub use active::{class_name, is_active};
pub use addon::{AddonButtonElement, AddonCallback, AddonControl, AddonDropdown, AddonDropdownElement, AddonElement, AddonKind, render_addons};
pub use bar::{BarElement, BarInput, ControlAction, ControlBar, ControlButton, PickerElement};
pub use controller::{DocumentController, MethodOutcome};
pub use deferred::{DeferredItem, DeferredQueue, DeferredWork};
pub use dispatch::{DispatchOutcome, dispatch};
pub use error::{RenderError, Result};
pub use overlay::{CloseReason, MediaOverlay, OverlayState};
pub use picker::{CommonProps, ForceRenderHook, MediaLibraryHandle, MediaPickerProps, PickerSpec, ViewAnchor};
pub use resolve::{PlanItem, RenderPlan, RenderedControl, resolve};
