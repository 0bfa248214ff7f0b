//! Core Router Implementation.
//!
//! [`RouteTable`] maps paths to views by exact string match. [`Router`] binds
//! a table to an injected document and navigation context and drives render
//! passes from clicks and history events.

use super::error::RouterError;
use super::history::{NavigationContext, NavigationType};
use super::link::resolve_same_origin;
use crate::component::View;
use crate::dom::{ClickEvent, Document, Element};
use crate::{error_log, info_log, warn_log};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Type alias for view factories.
pub type ViewFactory = Rc<dyn Fn() -> View>;

/// A single route definition.
#[derive(Clone)]
pub struct Route {
	/// The exact path this route answers to.
	path: String,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// The view factory.
	view: ViewFactory,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	pub fn new<F>(path: impl Into<String>, view: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			path: path.into(),
			name: None,
			view: Rc::new(view),
		}
	}

	/// Creates a named route.
	pub fn named<F>(name: impl Into<String>, path: impl Into<String>, view: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			path: path.into(),
			name: Some(name.into()),
			view: Rc::new(view),
		}
	}

	/// Returns the route path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Exact, case-sensitive comparison. No trailing-slash normalisation.
	pub fn matches(&self, path: &str) -> bool {
		self.path == path
	}

	/// Renders the route's view.
	pub fn render(&self) -> View {
		(self.view)()
	}
}

/// The path-to-view lookup table.
#[derive(Clone, Default)]
pub struct RouteTable {
	/// Registered routes, in registration order.
	routes: Vec<Route>,
	/// Named routes for reverse lookups.
	named_routes: HashMap<String, usize>,
	/// Not found handler.
	not_found: Option<ViewFactory>,
}

impl std::fmt::Debug for RouteTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteTable")
			.field("routes", &self.routes)
			.field("has_not_found", &self.not_found.is_some())
			.finish()
	}
}

impl RouteTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a route.
	pub fn route<F>(mut self, path: &str, view: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route::new(path, view));
		self
	}

	/// Adds a named route.
	pub fn named_route<F>(mut self, name: &str, path: &str, view: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		let index = self.routes.len();
		self.routes.push(Route::named(name, path, view));
		self.named_routes.insert(name.to_string(), index);
		self
	}

	/// Sets the view rendered for unmatched paths.
	pub fn not_found<F>(mut self, view: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.not_found = Some(Rc::new(view));
		self
	}

	/// Returns the first route registered for exactly `path`.
	pub fn match_path(&self, path: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.matches(path))
	}

	/// Returns the view for `path`: the matched route, else the not-found
	/// view, else an empty view.
	pub fn resolve(&self, path: &str) -> View {
		if let Some(route) = self.match_path(path) {
			route.render()
		} else if let Some(not_found) = &self.not_found {
			not_found()
		} else {
			View::Empty
		}
	}

	/// Returns the path of a named route.
	pub fn reverse(&self, name: &str) -> Result<&str, RouterError> {
		self.named_routes
			.get(name)
			.map(|&index| self.routes[index].path())
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))
	}

	/// Returns the registered routes.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}
}

/// The client-side router.
///
/// Renders [`RouteTable`] views into the element with id `outlet_id`.
pub struct Router<D: Document, N: NavigationContext> {
	table: RouteTable,
	document: D,
	history: N,
	outlet_id: String,
}

impl<D: Document, N: NavigationContext> std::fmt::Debug for Router<D, N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("table", &self.table)
			.field("outlet_id", &self.outlet_id)
			.finish()
	}
}

impl<D: Document, N: NavigationContext> Router<D, N> {
	/// Creates a router. Nothing is subscribed or rendered until [`start`](Self::start).
	pub fn new(table: RouteTable, document: D, history: N, outlet_id: impl Into<String>) -> Self {
		Self {
			table,
			document,
			history,
			outlet_id: outlet_id.into(),
		}
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Returns the document the router renders into.
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Returns the navigation context.
	pub fn history(&self) -> &N {
		&self.history
	}

	/// Returns the id of the content region.
	pub fn outlet_id(&self) -> &str {
		&self.outlet_id
	}

	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.history.current_path()
	}

	/// Subscribes to back/forward navigation and to document clicks, then
	/// renders the current path.
	///
	/// The listeners hold weak references: they stop acting once every
	/// returned handle is dropped.
	pub fn start(self) -> Result<Rc<Self>, RouterError> {
		let router = Rc::new(self);

		let weak: Weak<Self> = Rc::downgrade(&router);
		router.history.on_pop_state(Rc::new(move || {
			if let Some(router) = weak.upgrade()
				&& let Err(e) = router.handle_pop_state()
			{
				error_log!("Failed to handle history navigation: {}", e);
			}
		}))?;

		let weak: Weak<Self> = Rc::downgrade(&router);
		router
			.document
			.on_click(Rc::new(move |event: &ClickEvent<D::Element>| {
				if let Some(router) = weak.upgrade()
					&& let Err(e) = router.handle_click(event)
				{
					error_log!("Failed to handle link click: {}", e);
				}
			}))?;

		router.render(NavigationType::Initial)?;
		Ok(router)
	}

	/// Clears the content region and renders the view for the current path.
	pub fn render(&self, cause: NavigationType) -> Result<(), RouterError> {
		let path = self.history.current_path();
		let outlet = self
			.document
			.get_element_by_id(&self.outlet_id)
			.ok_or_else(|| RouterError::OutletNotFound(self.outlet_id.clone()))?;

		outlet.clear()?;
		let view = self.table.resolve(&path);
		outlet.set_view(&view)?;

		let matched = self
			.table
			.match_path(&path)
			.map(|route| route.name().unwrap_or(route.path()))
			.unwrap_or("not found");
		info_log!("Rendered {} ({}): {}", path, cause, matched);
		Ok(())
	}

	/// Intercepts clicks on same-origin anchors.
	///
	/// Returns `Ok(true)` when the click was intercepted: the default action
	/// is prevented, the anchor's path is pushed and a render pass runs.
	/// Any other click is left to the browser and returns `Ok(false)`.
	pub fn handle_click(&self, event: &ClickEvent<D::Element>) -> Result<bool, RouterError> {
		let Some(target) = event.target() else {
			return Ok(false);
		};
		if !target.tag_name().eq_ignore_ascii_case("a") {
			return Ok(false);
		}
		let Some(href) = target.get_attribute("href") else {
			return Ok(false);
		};

		let location = self.history.location_href();
		let path = match resolve_same_origin(&location, &self.history.origin(), &href) {
			Ok(Some(path)) => path,
			Ok(None) => return Ok(false),
			Err(e) => {
				warn_log!("Leaving click on '{}' to the browser: {}", href, e);
				return Ok(false);
			}
		};

		event.prevent_default();
		self.history.push_state(&path)?;
		self.render(NavigationType::Push)?;
		Ok(true)
	}

	/// Re-renders after the browser moved through history.
	pub fn handle_pop_state(&self) -> Result<(), RouterError> {
		self.render(NavigationType::Pop)
	}

	/// Pushes `path` onto history and renders it.
	pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
		self.history.push_state(path)?;
		self.render(NavigationType::Push)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	fn home_view() -> View {
		View::text("Home")
	}

	fn budgets_view() -> View {
		View::text("Budgets")
	}

	fn not_found_view() -> View {
		View::text("404")
	}

	#[fixture]
	fn table() -> RouteTable {
		RouteTable::new()
			.named_route("home", "/", home_view)
			.named_route("budgets", "/budgets", budgets_view)
			.not_found(not_found_view)
	}

	#[rstest]
	fn test_route_new() {
		let route = Route::new("/", home_view);
		assert!(route.name().is_none());
		assert_eq!(route.path(), "/");
	}

	#[rstest]
	fn test_route_named() {
		let route = Route::named("home", "/", home_view);
		assert_eq!(route.name(), Some("home"));
		assert_eq!(route.render(), View::text("Home"));
	}

	#[rstest]
	fn test_table_new_is_empty() {
		let table = RouteTable::new();
		assert_eq!(table.route_count(), 0);
		assert_eq!(table.resolve("/"), View::Empty);
	}

	#[rstest]
	fn test_table_named_routes(table: RouteTable) {
		assert_eq!(table.route_count(), 2);
		assert!(table.has_route("home"));
		assert!(table.has_route("budgets"));
		assert!(!table.has_route("nonexistent"));
	}

	#[rstest]
	#[case("/", Some("/"))]
	#[case("/budgets", Some("/budgets"))]
	#[case("/budgets/", None)]
	#[case("/Budgets", None)]
	#[case("/budgets/42", None)]
	#[case("", None)]
	#[case("//", None)]
	fn test_match_is_exact(table: RouteTable, #[case] path: &str, #[case] expected: Option<&str>) {
		assert_eq!(table.match_path(path).map(Route::path), expected);
	}

	#[rstest]
	fn test_resolve_falls_back_to_not_found(table: RouteTable) {
		assert_eq!(table.resolve("/budgets"), View::text("Budgets"));
		assert_eq!(table.resolve("/nowhere"), View::text("404"));
	}

	#[rstest]
	fn test_first_registered_route_wins() {
		let table = RouteTable::new()
			.route("/", home_view)
			.route("/", budgets_view);
		assert_eq!(table.resolve("/"), View::text("Home"));
	}

	#[rstest]
	fn test_reverse(table: RouteTable) {
		assert_eq!(table.reverse("home").unwrap(), "/");
		assert_eq!(table.reverse("budgets").unwrap(), "/budgets");
	}

	#[rstest]
	fn test_reverse_invalid_name(table: RouteTable) {
		let result = table.reverse("nonexistent");
		assert!(matches!(result, Err(RouterError::InvalidRouteName(_))));
	}
}
