//! Browser tests for the mounted application
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use budget_optimizer::{App, AppSettings};
use budget_pages::dom::web::WebDocument;
use budget_pages::dom::{Document, Element};
use budget_pages::router::{BrowserHistory, NavigationContext};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_mount_and_navigate() {
	let document = WebDocument::current().unwrap();
	let host = document.inner().create_element("div").unwrap();
	host.set_id("wasm-app");
	document.inner().body().unwrap().append_child(&host).unwrap();

	let settings = AppSettings {
		mount_id: "wasm-app".to_string(),
		content_id: "wasm-content".to_string(),
		..AppSettings::default()
	};
	let history = BrowserHistory::current().unwrap();
	let _app = App::new(settings, document.clone(), history.clone())
		.mount()
		.unwrap();

	let links = document.get_elements_by_class_name("nav-link");
	assert_eq!(links.len(), 4);

	let budgets = links
		.iter()
		.find(|link| link.get_attribute("href").as_deref() == Some("/budgets"))
		.unwrap();
	budgets
		.inner()
		.clone()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
		.click();

	assert_eq!(history.current_path(), "/budgets");
	let content = document.get_element_by_id("wasm-content").unwrap();
	assert_eq!(content.text_content(), "Presupuestos");
	assert!(budgets.has_class("active"));
}
