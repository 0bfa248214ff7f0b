//! In-memory implementation of the DOM abstraction.

use crate::component::{ElementView, IntoView, View, html_escape};
use crate::dom::{ClickEvent, ClickHandler, Document, DomError, Element};
use std::cell::RefCell;
use std::rc::Rc;

enum Child {
	Element(MemoryElement),
	Text(String),
}

struct NodeData {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<Child>,
	listeners: Vec<ClickHandler<MemoryElement>>,
}

/// An element node of a [`MemoryDocument`].
///
/// Clones share the node; equality is node identity.
#[derive(Clone)]
pub struct MemoryElement {
	node: Rc<RefCell<NodeData>>,
}

impl PartialEq for MemoryElement {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

impl Eq for MemoryElement {}

impl std::fmt::Debug for MemoryElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let node = self.node.borrow();
		f.debug_struct("MemoryElement")
			.field("tag", &node.tag)
			.field("attrs", &node.attrs)
			.field("children", &node.children.len())
			.field("listeners", &node.listeners.len())
			.finish()
	}
}

impl MemoryElement {
	/// Creates a detached element.
	pub fn new(tag: &str) -> Self {
		Self {
			node: Rc::new(RefCell::new(NodeData {
				tag: tag.to_ascii_lowercase(),
				attrs: Vec::new(),
				children: Vec::new(),
				listeners: Vec::new(),
			})),
		}
	}

	/// Builds a detached element tree from a view element.
	pub fn from_view(view: &ElementView) -> Self {
		let element = Self::new(view.tag_name());
		{
			let mut node = element.node.borrow_mut();
			node.attrs = view
				.attrs()
				.iter()
				.map(|(name, value)| (name.to_string(), value.to_string()))
				.collect();
			node.children = view.child_views().iter().flat_map(children_of).collect();
		}
		element
	}

	/// Sets an attribute, replacing any existing value.
	pub fn set_attribute(&self, name: &str, value: &str) {
		let mut node = self.node.borrow_mut();
		match node.attrs.iter_mut().find(|(n, _)| n == name) {
			Some((_, v)) => *v = value.to_string(),
			None => node.attrs.push((name.to_string(), value.to_string())),
		}
	}

	/// Appends `child` as the last child.
	pub fn append_child(&self, child: &MemoryElement) {
		self.node
			.borrow_mut()
			.children
			.push(Child::Element(child.clone()));
	}

	/// Returns the element children, in order.
	pub fn children(&self) -> Vec<MemoryElement> {
		self.node
			.borrow()
			.children
			.iter()
			.filter_map(|child| match child {
				Child::Element(el) => Some(el.clone()),
				Child::Text(_) => None,
			})
			.collect()
	}

	/// Returns the `id` attribute.
	pub fn id(&self) -> Option<String> {
		self.get_attribute("id")
	}

	/// Returns the number of click listeners attached directly to this element.
	pub fn listener_count(&self) -> usize {
		self.node.borrow().listeners.len()
	}

	/// Serialises the element's children to HTML.
	pub fn inner_html(&self) -> String {
		let mut output = String::new();
		for child in &self.node.borrow().children {
			match child {
				Child::Element(el) => el.write_html(&mut output),
				Child::Text(text) => output.push_str(&html_escape(text)),
			}
		}
		output
	}

	/// Serialises the element and its children to HTML.
	pub fn outer_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		let node = self.node.borrow();
		output.push('<');
		output.push_str(&node.tag);
		for (name, value) in &node.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}
		output.push('>');
		drop(node);
		output.push_str(&self.inner_html());
		output.push_str("</");
		output.push_str(&self.node.borrow().tag);
		output.push('>');
	}

	fn classes(&self) -> Vec<String> {
		self.get_attribute("class")
			.map(|class| class.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}

	fn find(&self, predicate: &dyn Fn(&MemoryElement) -> bool, found: &mut Vec<MemoryElement>) {
		for child in self.children() {
			if predicate(&child) {
				found.push(child.clone());
			}
			child.find(predicate, found);
		}
	}

	/// Path from `self` down to `target`, both included.
	fn path_to(&self, target: &MemoryElement) -> Option<Vec<MemoryElement>> {
		if self == target {
			return Some(vec![self.clone()]);
		}
		self.children().into_iter().find_map(|child| {
			child.path_to(target).map(|mut path| {
				path.insert(0, self.clone());
				path
			})
		})
	}

	fn listeners(&self) -> Vec<ClickHandler<MemoryElement>> {
		self.node.borrow().listeners.clone()
	}
}

fn children_of(view: &View) -> Vec<Child> {
	match view {
		View::Element(el) => vec![Child::Element(MemoryElement::from_view(el))],
		View::Text(text) => vec![Child::Text(text.to_string())],
		View::Fragment(views) => views.iter().flat_map(children_of).collect(),
		View::Empty => Vec::new(),
	}
}

impl Element for MemoryElement {
	fn tag_name(&self) -> String {
		self.node.borrow().tag.clone()
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		self.node
			.borrow()
			.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.clone())
	}

	fn text_content(&self) -> String {
		let mut output = String::new();
		for child in &self.node.borrow().children {
			match child {
				Child::Element(el) => output.push_str(&el.text_content()),
				Child::Text(text) => output.push_str(text),
			}
		}
		output
	}

	fn has_class(&self, class: &str) -> bool {
		self.classes().iter().any(|c| c == class)
	}

	fn add_class(&self, class: &str) -> Result<(), DomError> {
		let mut classes = self.classes();
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
			self.set_attribute("class", &classes.join(" "));
		}
		Ok(())
	}

	fn remove_class(&self, class: &str) -> Result<(), DomError> {
		if self.get_attribute("class").is_some() {
			let classes: Vec<String> = self.classes().into_iter().filter(|c| c != class).collect();
			self.set_attribute("class", &classes.join(" "));
		}
		Ok(())
	}

	fn set_view(&self, view: &View) -> Result<(), DomError> {
		let children = children_of(view);
		self.node.borrow_mut().children = children;
		Ok(())
	}

	fn on_click(&self, handler: ClickHandler<MemoryElement>) -> Result<(), DomError> {
		self.node.borrow_mut().listeners.push(handler);
		Ok(())
	}
}

struct DocumentData {
	body: MemoryElement,
	listeners: RefCell<Vec<ClickHandler<MemoryElement>>>,
}

/// An in-memory document rooted at a `<body>` element.
///
/// Clones share the same tree.
#[derive(Clone)]
pub struct MemoryDocument {
	inner: Rc<DocumentData>,
}

impl std::fmt::Debug for MemoryDocument {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryDocument")
			.field("body", &self.inner.body)
			.field("listeners", &self.inner.listeners.borrow().len())
			.finish()
	}
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryDocument {
	/// Creates a document with an empty body.
	pub fn new() -> Self {
		Self {
			inner: Rc::new(DocumentData {
				body: MemoryElement::new("body"),
				listeners: RefCell::new(Vec::new()),
			}),
		}
	}

	/// Creates a document whose body contains `view`.
	pub fn with_body(view: impl IntoView) -> Self {
		let document = Self::new();
		let children = children_of(&view.into_view());
		document.inner.body.node.borrow_mut().children = children;
		document
	}

	/// Returns the `<body>` element.
	pub fn body(&self) -> MemoryElement {
		self.inner.body.clone()
	}

	/// Returns the number of document-level click listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	/// Dispatches a click on `target`.
	///
	/// Listeners run in browser order: the target's own, then each ancestor's
	/// up to `<body>`, then the document's. Detached targets only reach their
	/// own listeners. The returned event reports whether the default action
	/// was prevented.
	pub fn click(&self, target: &MemoryElement) -> ClickEvent<MemoryElement> {
		let event = ClickEvent::new(Some(target.clone()));

		let path = self.inner.body.path_to(target);
		let bubbling: Vec<MemoryElement> = match &path {
			Some(path) => path.iter().rev().cloned().collect(),
			None => vec![target.clone()],
		};

		for element in bubbling {
			for listener in element.listeners() {
				listener(&event);
			}
		}

		if path.is_some() {
			let listeners = self.inner.listeners.borrow().clone();
			for listener in listeners {
				listener(&event);
			}
		}

		event
	}

	/// Clicks the element with the given id.
	pub fn click_id(&self, id: &str) -> Result<ClickEvent<MemoryElement>, DomError> {
		let target = self.require_element(id)?;
		Ok(self.click(&target))
	}
}

impl Document for MemoryDocument {
	type Element = MemoryElement;

	fn get_element_by_id(&self, id: &str) -> Option<MemoryElement> {
		let mut found = Vec::new();
		self.inner
			.body
			.find(&|el: &MemoryElement| el.get_attribute("id").as_deref() == Some(id), &mut found);
		found.into_iter().next()
	}

	fn get_elements_by_class_name(&self, class: &str) -> Vec<MemoryElement> {
		let mut found = Vec::new();
		self.inner
			.body
			.find(&|el: &MemoryElement| el.has_class(class), &mut found);
		found
	}

	fn on_click(&self, handler: ClickHandler<MemoryElement>) -> Result<(), DomError> {
		self.inner.listeners.borrow_mut().push(handler);
		Ok(())
	}
}
