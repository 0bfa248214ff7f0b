//! Browser tests for the web_sys DOM bindings
//!
//! Run with `wasm-pack test --headless --chrome crates/budget-pages`.

#![cfg(target_arch = "wasm32")]

use budget_pages::builder::html::{a, div, h2, nav};
use budget_pages::dom::web::{WebDocument, WebElement};
use budget_pages::dom::{Document, DomError, Element};
use budget_pages::navigation::NavHighlighter;
use budget_pages::router::{BrowserHistory, NavigationContext, RouteTable, Router};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts a fresh fixture under `<body>` and returns its root.
fn mount_fixture(root_id: &str) -> WebDocument {
	let document = WebDocument::current().unwrap();
	let body = document.inner().body().unwrap();
	let root = document.inner().create_element("div").unwrap();
	root.set_id(root_id);
	body.append_child(&root).unwrap();

	let fixture = div()
		.child(
			nav()
				.child(a("/").class("test-link").id(format!("{}-home", root_id)).child("Home"))
				.child(
					a("/wasm-budgets")
						.class("test-link")
						.id(format!("{}-budgets", root_id))
						.child("Budgets"),
				),
		)
		.child(div().id(format!("{}-content", root_id)));
	WebElement::new(root).set_view(&fixture.into()).unwrap();
	document
}

fn click(document: &WebDocument, id: &str) {
	let element = document.inner().get_element_by_id(id).unwrap();
	element.dyn_into::<web_sys::HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn test_lookup_and_class_list() {
	let document = mount_fixture("lookup");
	let home = document.get_element_by_id("lookup-home").unwrap();
	assert_eq!(home.tag_name(), "a");
	assert_eq!(home.get_attribute("href").as_deref(), Some("/"));

	home.add_class("active").unwrap();
	assert!(home.has_class("active"));
	home.remove_class("active").unwrap();
	assert!(!home.has_class("active"));

	assert_eq!(
		document.require_element("lookup-missing"),
		Err(DomError::ElementNotFound("lookup-missing".to_string()))
	);
}

#[wasm_bindgen_test]
fn test_set_view_escapes_text() {
	let document = mount_fixture("escape");
	let content = document.get_element_by_id("escape-content").unwrap();

	content.set_view(&h2().child("<b>Reportes</b>").into()).unwrap();

	assert_eq!(content.text_content(), "<b>Reportes</b>");
	assert!(content.inner().query_selector("b").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_router_intercepts_same_origin_click() {
	let document = mount_fixture("router");
	let history = BrowserHistory::current().unwrap();
	let table = RouteTable::new()
		.route("/wasm-budgets", || h2().child("Presupuestos").into())
		.not_found(|| h2().child("404 - Página no encontrada").into());
	let _router = Router::new(table, document.clone(), history.clone(), "router-content")
		.start()
		.unwrap();

	click(&document, "router-budgets");

	assert_eq!(history.current_path(), "/wasm-budgets");
	let content = document.get_element_by_id("router-content").unwrap();
	assert_eq!(content.text_content(), "Presupuestos");
}

#[wasm_bindgen_test]
fn test_highlighter_moves_marker_on_click() {
	let document = mount_fixture("highlight");
	let highlighter = NavHighlighter::new(document.clone(), "test-link", "active");
	let links = highlighter.links().len();
	assert!(links >= 2);

	let budgets = document.get_element_by_id("highlight-budgets").unwrap();
	highlighter.activate(&budgets).unwrap();
	assert!(budgets.has_class("active"));
	assert_eq!(highlighter.active_links().len(), 1);
}
