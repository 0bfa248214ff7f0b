//! Browser implementation of the DOM abstraction (WASM only).

use super::{ClickEvent, ClickHandler, DomError};
use crate::component::View;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub(crate) fn js_error(value: JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Wraps a click handler into a listener closure.
///
/// The closure is leaked with `forget()`: listeners live for the lifetime of
/// the page.
fn click_listener(
	target: &web_sys::EventTarget,
	handler: ClickHandler<WebElement>,
) -> Result<(), DomError> {
	let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
		let element = event
			.target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			.map(WebElement::new);
		let click = ClickEvent::new(element);
		handler(&click);
		if click.is_default_prevented() {
			event.prevent_default();
		}
	}) as Box<dyn FnMut(_)>);

	target
		.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
		.map_err(|e| DomError::Operation(js_error(e)))?;
	closure.forget();
	Ok(())
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
	inner: web_sys::Document,
}

impl WebDocument {
	/// Wraps an existing document.
	pub fn new(inner: web_sys::Document) -> Self {
		Self { inner }
	}

	/// Returns the document of the current window.
	pub fn current() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::Unavailable("Window"))?;
		let document = window
			.document()
			.ok_or(DomError::Unavailable("Document"))?;
		Ok(Self::new(document))
	}

	/// Returns the wrapped `web_sys::Document`.
	pub fn inner(&self) -> &web_sys::Document {
		&self.inner
	}
}

impl super::Document for WebDocument {
	type Element = WebElement;

	fn get_element_by_id(&self, id: &str) -> Option<WebElement> {
		self.inner.get_element_by_id(id).map(WebElement::new)
	}

	fn get_elements_by_class_name(&self, class: &str) -> Vec<WebElement> {
		let collection = self.inner.get_elements_by_class_name(class);
		(0..collection.length())
			.filter_map(|i| collection.item(i))
			.map(WebElement::new)
			.collect()
	}

	fn on_click(&self, handler: ClickHandler<WebElement>) -> Result<(), DomError> {
		click_listener(&self.inner, handler)
	}
}

/// A browser element.
#[derive(Debug, Clone, PartialEq)]
pub struct WebElement {
	inner: web_sys::Element,
}

impl WebElement {
	/// Wraps an existing element.
	pub fn new(inner: web_sys::Element) -> Self {
		Self { inner }
	}

	/// Returns the wrapped `web_sys::Element`.
	pub fn inner(&self) -> &web_sys::Element {
		&self.inner
	}
}

impl super::Element for WebElement {
	fn tag_name(&self) -> String {
		self.inner.tag_name().to_ascii_lowercase()
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		self.inner.get_attribute(name)
	}

	fn text_content(&self) -> String {
		self.inner.text_content().unwrap_or_default()
	}

	fn has_class(&self, class: &str) -> bool {
		self.inner.class_list().contains(class)
	}

	fn add_class(&self, class: &str) -> Result<(), DomError> {
		self.inner
			.class_list()
			.add_1(class)
			.map_err(|e| DomError::Operation(js_error(e)))
	}

	fn remove_class(&self, class: &str) -> Result<(), DomError> {
		self.inner
			.class_list()
			.remove_1(class)
			.map_err(|e| DomError::Operation(js_error(e)))
	}

	fn set_view(&self, view: &View) -> Result<(), DomError> {
		// SAFETY(XSS): render_to_string() HTML-escapes all text content and
		// attribute values.
		self.inner.set_inner_html(&view.render_to_string());
		Ok(())
	}

	fn on_click(&self, handler: ClickHandler<WebElement>) -> Result<(), DomError> {
		click_listener(&self.inner, handler)
	}
}
