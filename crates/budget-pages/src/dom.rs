//! DOM abstraction layer.
//!
//! The router and the navigation highlighter never touch `web_sys` directly.
//! They are written against [`Document`] and [`Element`], which have a
//! browser implementation ([`web`], WASM only) and an in-memory one
//! ([`crate::testing::MemoryDocument`]).

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::component::View;
use std::cell::Cell;
use std::rc::Rc;

/// Error type for DOM operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	/// No element carries the requested id.
	#[error("Element not found: #{0}")]
	ElementNotFound(String),
	/// The underlying DOM call failed.
	#[error("DOM operation failed: {0}")]
	Operation(String),
	/// A global object (window, document, history) is not available.
	#[error("{0} object not available")]
	Unavailable(&'static str),
}

/// Handler invoked for click events.
pub type ClickHandler<E> = Rc<dyn Fn(&ClickEvent<E>)>;

/// A click as seen by handlers.
///
/// Handlers may call [`ClickEvent::prevent_default`]; the DOM implementation
/// applies it to the underlying event once all handlers have run.
pub struct ClickEvent<E> {
	target: Option<E>,
	default_prevented: Cell<bool>,
}

impl<E> ClickEvent<E> {
	/// Creates an event for the given target element.
	pub fn new(target: Option<E>) -> Self {
		Self {
			target,
			default_prevented: Cell::new(false),
		}
	}

	/// The element the click originated on, if it was an element.
	pub fn target(&self) -> Option<&E> {
		self.target.as_ref()
	}

	/// Suppresses the browser's default action for this click.
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	/// Returns whether a handler suppressed the default action.
	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl<E: std::fmt::Debug> std::fmt::Debug for ClickEvent<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClickEvent")
			.field("target", &self.target)
			.field("default_prevented", &self.default_prevented.get())
			.finish()
	}
}

/// A DOM element handle.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait Element: Clone + 'static {
	/// Lower-cased tag name.
	fn tag_name(&self) -> String;

	/// Raw attribute value, exactly as written in the markup.
	fn get_attribute(&self, name: &str) -> Option<String>;

	/// Concatenated text of all descendant text nodes.
	fn text_content(&self) -> String;

	/// Returns whether the class list contains `class`.
	fn has_class(&self, class: &str) -> bool;

	/// Adds `class` to the class list. Adding a present class is a no-op.
	fn add_class(&self, class: &str) -> Result<(), DomError>;

	/// Removes `class` from the class list. Removing an absent class is a no-op.
	fn remove_class(&self, class: &str) -> Result<(), DomError>;

	/// Replaces the element's content with `view`.
	fn set_view(&self, view: &View) -> Result<(), DomError>;

	/// Removes all of the element's content.
	fn clear(&self) -> Result<(), DomError> {
		self.set_view(&View::Empty)
	}

	/// Subscribes to clicks on this element or its descendants.
	fn on_click(&self, handler: ClickHandler<Self>) -> Result<(), DomError>;
}

/// A DOM document handle.
pub trait Document: Clone + 'static {
	/// Element type produced by this document.
	type Element: Element;

	/// Looks up an element by id.
	fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// Returns every element carrying `class`, in document order.
	fn get_elements_by_class_name(&self, class: &str) -> Vec<Self::Element>;

	/// Subscribes to every click in the document.
	fn on_click(&self, handler: ClickHandler<Self::Element>) -> Result<(), DomError>;

	/// Looks up an element by id, failing when it is absent.
	fn require_element(&self, id: &str) -> Result<Self::Element, DomError> {
		self.get_element_by_id(id)
			.ok_or_else(|| DomError::ElementNotFound(id.to_string()))
	}
}
