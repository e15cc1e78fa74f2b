//! Creation counters used to recover column declaration order.
//!
//! Every [`Column`](crate::Column) is stamped with a sequence number when it
//! is constructed. Sorting columns by that number reproduces the order they
//! were written in, even after they have been collected into an unordered
//! map by a table definition.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter shared by [`Column::new`](crate::Column::new) and
/// [`Column::named`](crate::Column::named). Never reset.
static GLOBAL_COUNTER: CreationCounter = CreationCounter::with_id(0);

/// Identity source for injected counters. Zero is reserved for the global one.
static NEXT_COUNTER_ID: AtomicU64 = AtomicU64::new(1);

/// Monotonic sequence source for column creation stamps
///
/// The global instance is used by default. A separate counter can be injected
/// through [`Column::with_counter`](crate::Column::with_counter), in which case
/// declaration order is only recovered between columns stamped by the same
/// counter. Each counter carries its own identity, so columns from different
/// counters never compare equal.
#[derive(Debug)]
pub struct CreationCounter {
	id: u64,
	next: AtomicU64,
}

impl CreationCounter {
	/// Creates a counter starting at zero
	pub fn new() -> Self {
		Self::with_id(NEXT_COUNTER_ID.fetch_add(1, Ordering::SeqCst))
	}

	const fn with_id(id: u64) -> Self {
		Self {
			id,
			next: AtomicU64::new(0),
		}
	}

	/// Returns the process-wide counter
	pub fn global() -> &'static CreationCounter {
		&GLOBAL_COUNTER
	}

	/// Returns the identity of this counter
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Returns the next stamp and advances the counter
	pub fn next(&self) -> u64 {
		self.next.fetch_add(1, Ordering::SeqCst)
	}

	/// Returns the stamp the next call to [`next`](Self::next) will hand out
	pub fn peek(&self) -> u64 {
		self.next.load(Ordering::SeqCst)
	}
}

impl Default for CreationCounter {
	fn default() -> Self {
		Self::new()
	}
}
