//! Integration tests for navigation highlighting alongside the router

use budget_pages::builder::html::{a, div, nav};
use budget_pages::component::View;
use budget_pages::dom::{Document, Element};
use budget_pages::navigation::NavHighlighter;
use budget_pages::router::{NavigationContext, RouteTable, Router};
use budget_pages::testing::{MemoryDocument, MemoryHistory};
use rstest::{fixture, rstest};

#[fixture]
fn document() -> MemoryDocument {
	MemoryDocument::with_body(
		div()
			.child(
				nav()
					.class("nav")
					.child(a("/").class("nav-link").id("dashboard").child("Dashboard"))
					.child(a("/budgets").class("nav-link").id("budgets").child("Budgets"))
					.child(
						a("/transactions")
							.class("nav-link")
							.id("transactions")
							.child("Transactions"),
					)
					.child(a("/reports").class("nav-link").id("reports").child("Reports")),
			)
			.child(div().id("main-content")),
	)
}

fn active_ids(document: &MemoryDocument) -> Vec<String> {
	document
		.get_elements_by_class_name("active")
		.iter()
		.filter_map(|el| el.get_attribute("id"))
		.collect()
}

#[rstest]
#[case("/", vec!["dashboard"])]
#[case("/transactions", vec!["transactions"])]
#[case("/settings", vec![])]
#[case("/reports/", vec![])]
fn test_start_marks_current_path(
	document: MemoryDocument,
	#[case] path: &str,
	#[case] expected: Vec<&str>,
) {
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");
	let marked = highlighter.start(path).unwrap();
	assert_eq!(marked, expected.len());
	assert_eq!(active_ids(&document), expected);
}

#[rstest]
fn test_click_moves_marker(document: MemoryDocument) {
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");
	highlighter.start("/transactions").unwrap();

	document.click_id("budgets").unwrap();
	assert_eq!(active_ids(&document), vec!["budgets"]);

	document.click_id("reports").unwrap();
	assert_eq!(active_ids(&document), vec!["reports"]);
}

#[rstest]
fn test_duplicate_hrefs_are_all_marked() {
	let document = MemoryDocument::with_body(
		nav()
			.child(a("/budgets").class("nav-link").id("first"))
			.child(a("/budgets").class("nav-link").id("second"))
			.child(a("/").class("nav-link").id("home")),
	);
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");

	assert_eq!(highlighter.start("/budgets").unwrap(), 2);
	assert_eq!(active_ids(&document), vec!["first", "second"]);
}

#[rstest]
fn test_marker_follows_router_clicks(document: MemoryDocument) {
	let history = MemoryHistory::new("http://localhost:5173", "/");
	let table = RouteTable::new()
		.route("/", || View::text("Dashboard"))
		.route("/budgets", || View::text("Presupuestos"))
		.not_found(|| View::text("404 - Página no encontrada"));
	let _router = Router::new(table, document.clone(), history.clone(), "main-content")
		.start()
		.unwrap();
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");
	highlighter.start(&history.current_path()).unwrap();
	assert_eq!(active_ids(&document), vec!["dashboard"]);

	let event = document.click_id("budgets").unwrap();

	assert!(event.is_default_prevented());
	assert_eq!(active_ids(&document), vec!["budgets"]);
	let content = document.get_element_by_id("main-content").unwrap();
	assert_eq!(content.text_content(), "Presupuestos");
}

#[rstest]
fn test_marker_moves_even_when_target_is_unrouted(document: MemoryDocument) {
	let history = MemoryHistory::new("http://localhost:5173", "/");
	let table = RouteTable::new()
		.route("/", || View::text("Dashboard"))
		.not_found(|| View::text("404 - Página no encontrada"));
	let _router = Router::new(table, document.clone(), history.clone(), "main-content")
		.start()
		.unwrap();
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");
	highlighter.start("/").unwrap();

	document.click_id("reports").unwrap();

	assert_eq!(active_ids(&document), vec!["reports"]);
	let content = document.get_element_by_id("main-content").unwrap();
	assert_eq!(content.text_content(), "404 - Página no encontrada");
}

#[rstest]
fn test_history_pop_does_not_move_marker(document: MemoryDocument) {
	let history = MemoryHistory::new("http://localhost:5173", "/");
	let table = RouteTable::new()
		.route("/", || View::text("Dashboard"))
		.route("/budgets", || View::text("Presupuestos"));
	let _router = Router::new(table, document.clone(), history.clone(), "main-content")
		.start()
		.unwrap();
	let highlighter = NavHighlighter::new(document.clone(), "nav-link", "active");
	highlighter.start("/").unwrap();
	document.click_id("budgets").unwrap();

	history.back();

	assert_eq!(active_ids(&document), vec!["budgets"]);
	let content = document.get_element_by_id("main-content").unwrap();
	assert_eq!(content.text_content(), "Dashboard");
}
