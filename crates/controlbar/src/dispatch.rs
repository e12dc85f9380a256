//! Command dispatch: route a control activation to the controller.
//!
//! Dispatch is a pure router. It never fails; commands the controller cannot
//! run are dropped. Every dispatch, applied or not, queues exactly one focus
//! restoration to run after the current update pass.

use quill_invocation::ControlCommand;
use quill_registry::find_editor_method;

use crate::controller::{DocumentController, MethodOutcome};
use crate::deferred::DeferredQueue;

/// What happened to a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// The controller received the command.
	Applied,
	/// The command named a method the controller does not provide.
	Ignored,
}

/// Routes `command` to `controller` and schedules focus restoration.
pub fn dispatch<C: DocumentController + ?Sized>(command: &ControlCommand, controller: &mut C, deferred: &mut DeferredQueue) -> DispatchOutcome {
	let outcome = route(command, controller);
	tracing::trace!(command = %command.describe(), ?outcome, "Dispatched control command");
	deferred.schedule_focus();
	outcome
}

fn route<C: DocumentController + ?Sized>(command: &ControlCommand, controller: &mut C) -> DispatchOutcome {
	match command {
		ControlCommand::InlineStyle(style) => {
			controller.toggle_style(style);
			DispatchOutcome::Applied
		}
		ControlCommand::BlockType(block_type) => {
			controller.toggle_block(block_type);
			DispatchOutcome::Applied
		}
		ControlCommand::EditorMethod(name) => {
			let Some(method) = find_editor_method(name) else {
				return DispatchOutcome::Ignored;
			};
			match controller.invoke(method) {
				MethodOutcome::Applied => DispatchOutcome::Applied,
				MethodOutcome::Unsupported => DispatchOutcome::Ignored,
			}
		}
	}
}
