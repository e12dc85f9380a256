//! Work deferred until the host finishes its current update pass.
//!
//! Focus must be restored only after the controller has applied a mutation
//! and the view has re-rendered; otherwise the native caret lands on a stale
//! view. The bar therefore never calls [`DocumentController::focus`] inline.
//! It queues [`DeferredWork::RestoreFocus`] and the host drains the queue with
//! [`DeferredQueue::run`] once its render pass has committed.

use std::collections::VecDeque;

use crate::controller::DocumentController;

/// Deferred work item payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredWork {
	/// Call `focus()` on the controller.
	RestoreFocus,
}

/// Queue entry carrying its sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredItem {
	pub work: DeferredWork,
	pub seq: u64,
}

/// FIFO queue of work to run after the current cycle.
#[derive(Debug, Default)]
pub struct DeferredQueue {
	seq_next: u64,
	queue: VecDeque<DeferredItem>,
}

impl DeferredQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Enqueues one work item and returns its sequence number.
	pub fn enqueue(&mut self, work: DeferredWork) -> u64 {
		let seq = self.seq_next;
		self.seq_next = self.seq_next.wrapping_add(1);
		self.queue.push_back(DeferredItem { work, seq });
		seq
	}

	/// Enqueues a focus restoration and returns its sequence number.
	pub fn schedule_focus(&mut self) -> u64 {
		self.enqueue(DeferredWork::RestoreFocus)
	}

	/// Pops the next item in FIFO order.
	pub fn pop_front(&mut self) -> Option<DeferredItem> {
		self.queue.pop_front()
	}

	/// Returns queued item count.
	pub fn len(&self) -> usize {
		self.queue.len()
	}

	/// Returns true when queue is empty.
	pub fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}

	/// Returns number of queued focus restorations.
	pub fn pending_focus(&self) -> usize {
		self.queue
			.iter()
			.filter(|item| item.work == DeferredWork::RestoreFocus)
			.count()
	}

	/// Runs every queued item once against the controller, in order.
	///
	/// Returns the number of items run.
	pub fn run<C: DocumentController + ?Sized>(&mut self, controller: &mut C) -> usize {
		let mut ran = 0;
		while let Some(item) = self.queue.pop_front() {
			match item.work {
				DeferredWork::RestoreFocus => controller.focus(),
			}
			tracing::trace!(seq = item.seq, work = ?item.work, "Ran deferred work");
			ran += 1;
		}
		ran
	}
}
