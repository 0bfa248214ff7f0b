//! Navigation link highlighting.
//!
//! Marks the navigation link for the current path with an "active" class and
//! moves the marker to whichever link is clicked. The class list is the only
//! state; nothing is cached besides the set of links captured at start.

use crate::dom::{ClickEvent, Document, DomError, Element};
use crate::{debug_log, error_log};
use std::rc::Rc;

/// Toggles the active marker across navigation links.
#[derive(Debug, Clone)]
pub struct NavHighlighter<D: Document> {
	document: D,
	link_class: String,
	active_class: String,
}

impl<D: Document> NavHighlighter<D> {
	/// Creates a highlighter for elements carrying `link_class`.
	pub fn new(document: D, link_class: impl Into<String>, active_class: impl Into<String>) -> Self {
		Self {
			document,
			link_class: link_class.into(),
			active_class: active_class.into(),
		}
	}

	/// Returns the class that tags navigation links.
	pub fn link_class(&self) -> &str {
		&self.link_class
	}

	/// Returns the marker class.
	pub fn active_class(&self) -> &str {
		&self.active_class
	}

	/// Returns the navigation links, in document order.
	pub fn links(&self) -> Vec<D::Element> {
		self.document.get_elements_by_class_name(&self.link_class)
	}

	/// Returns the links currently carrying the marker.
	pub fn active_links(&self) -> Vec<D::Element> {
		self.links()
			.into_iter()
			.filter(|link| link.has_class(&self.active_class))
			.collect()
	}

	/// Marks every link whose raw `href` equals `path`.
	///
	/// Links are only ever marked here, never unmarked, so repeating the call
	/// for the same path leaves the same links marked. Several links sharing
	/// the href are all marked. Returns the number of matching links.
	pub fn highlight_path(&self, path: &str) -> Result<usize, DomError> {
		let mut marked = 0;
		for link in self.links() {
			if link.get_attribute("href").as_deref() == Some(path) {
				link.add_class(&self.active_class)?;
				marked += 1;
			}
		}
		debug_log!("Highlighted {} link(s) for {}", marked, path);
		Ok(marked)
	}

	/// Clears the marker from every link, then marks `link`.
	pub fn activate(&self, link: &D::Element) -> Result<(), DomError> {
		activate_in(&self.links(), link, &self.active_class)
	}

	/// Runs [`highlight_path`](Self::highlight_path) for `current_path`, then
	/// attaches a click handler to every link.
	///
	/// A clicked link always becomes the active one, whether or not the
	/// router renders its target.
	pub fn start(&self, current_path: &str) -> Result<usize, DomError> {
		let marked = self.highlight_path(current_path)?;

		let links = Rc::new(self.links());
		for link in links.iter() {
			let links = Rc::clone(&links);
			let clicked = link.clone();
			let active_class = self.active_class.clone();
			link.on_click(Rc::new(move |_event: &ClickEvent<D::Element>| {
				if let Err(e) = activate_in(&links, &clicked, &active_class) {
					error_log!("Failed to update active navigation link: {}", e);
				}
			}))?;
		}

		Ok(marked)
	}
}

fn activate_in<E: Element>(links: &[E], link: &E, active_class: &str) -> Result<(), DomError> {
	for other in links {
		other.remove_class(active_class)?;
	}
	link.add_class(active_class)
}
