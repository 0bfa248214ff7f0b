//! In-memory session history.

use crate::router::{NavigationContext, PopStateHandler, RouterError};
use std::cell::RefCell;
use std::rc::Rc;

struct HistoryData {
	origin: String,
	entries: Vec<String>,
	index: usize,
	listeners: Vec<PopStateHandler>,
}

/// A session history stack with a cursor, like the browser's.
///
/// `push_state` drops forward entries and appends. `back`/`forward` move the
/// cursor and notify pop-state listeners. `set_path` rewrites the current
/// entry without notifying anyone.
#[derive(Clone)]
pub struct MemoryHistory {
	inner: Rc<RefCell<HistoryData>>,
}

impl std::fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let data = self.inner.borrow();
		f.debug_struct("MemoryHistory")
			.field("origin", &data.origin)
			.field("entries", &data.entries)
			.field("index", &data.index)
			.finish()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("http://localhost", "/")
	}
}

impl MemoryHistory {
	/// Creates a history with a single entry for `initial_path`.
	pub fn new(origin: impl Into<String>, initial_path: impl Into<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(HistoryData {
				origin: origin.into(),
				entries: vec![initial_path.into()],
				index: 0,
				listeners: Vec::new(),
			})),
		}
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.inner.borrow().entries.clone()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.inner.borrow().entries.len()
	}

	/// Always false: a history has at least one entry.
	pub fn is_empty(&self) -> bool {
		self.inner.borrow().entries.is_empty()
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.inner.borrow().index
	}

	/// Replaces the current entry without notifying listeners.
	pub fn set_path(&self, path: impl Into<String>) {
		let mut data = self.inner.borrow_mut();
		let index = data.index;
		data.entries[index] = path.into();
	}

	/// Moves one entry back. Returns false when already at the oldest entry.
	pub fn back(&self) -> bool {
		{
			let mut data = self.inner.borrow_mut();
			if data.index == 0 {
				return false;
			}
			data.index -= 1;
		}
		self.notify();
		true
	}

	/// Moves one entry forward. Returns false when already at the newest entry.
	pub fn forward(&self) -> bool {
		{
			let mut data = self.inner.borrow_mut();
			if data.index + 1 >= data.entries.len() {
				return false;
			}
			data.index += 1;
		}
		self.notify();
		true
	}

	fn notify(&self) {
		let listeners = self.inner.borrow().listeners.clone();
		for listener in listeners {
			listener();
		}
	}
}

impl NavigationContext for MemoryHistory {
	fn current_path(&self) -> String {
		let data = self.inner.borrow();
		data.entries[data.index].clone()
	}

	fn origin(&self) -> String {
		self.inner.borrow().origin.clone()
	}

	fn push_state(&self, path: &str) -> Result<(), RouterError> {
		let mut data = self.inner.borrow_mut();
		let keep = data.index + 1;
		data.entries.truncate(keep);
		data.entries.push(path.to_string());
		data.index = keep;
		Ok(())
	}

	fn on_pop_state(&self, handler: PopStateHandler) -> Result<(), RouterError> {
		self.inner.borrow_mut().listeners.push(handler);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	fn test_push_appends_and_moves_cursor() {
		let history = MemoryHistory::new("http://localhost:5173", "/");
		history.push_state("/budgets").unwrap();
		history.push_state("/reports").unwrap();

		assert_eq!(history.entries(), vec!["/", "/budgets", "/reports"]);
		assert_eq!(history.index(), 2);
		assert_eq!(history.current_path(), "/reports");
		assert_eq!(history.location_href(), "http://localhost:5173/reports");
	}

	#[rstest]
	fn test_back_forward_notify_listeners() {
		let history = MemoryHistory::default();
		let pops = Rc::new(Cell::new(0));
		let counter = Rc::clone(&pops);
		history
			.on_pop_state(Rc::new(move || counter.set(counter.get() + 1)))
			.unwrap();

		history.push_state("/budgets").unwrap();
		assert_eq!(pops.get(), 0);

		assert!(history.back());
		assert_eq!(history.current_path(), "/");
		assert!(!history.back());

		assert!(history.forward());
		assert_eq!(history.current_path(), "/budgets");
		assert!(!history.forward());

		assert_eq!(pops.get(), 2);
	}

	#[rstest]
	fn test_push_after_back_drops_forward_entries() {
		let history = MemoryHistory::default();
		history.push_state("/budgets").unwrap();
		history.push_state("/reports").unwrap();
		history.back();
		history.push_state("/transactions").unwrap();

		assert_eq!(history.entries(), vec!["/", "/budgets", "/transactions"]);
		assert!(!history.forward());
	}

	#[rstest]
	fn test_set_path_is_silent() {
		let history = MemoryHistory::default();
		let pops = Rc::new(Cell::new(0));
		let counter = Rc::clone(&pops);
		history
			.on_pop_state(Rc::new(move || counter.set(counter.get() + 1)))
			.unwrap();

		history.set_path("/reports");
		assert_eq!(history.current_path(), "/reports");
		assert_eq!(history.len(), 1);
		assert!(!history.is_empty());
		assert_eq!(pops.get(), 0);
	}
}
