//! Browser entry point (WASM only).

use crate::app::{App, AppError, MountedApp};
use crate::settings::AppSettings;
use budget_pages::dom::web::WebDocument;
use budget_pages::router::BrowserHistory;
use budget_pages::warn_log;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// Id of the optional JSON settings element in the host page.
const SETTINGS_ELEMENT_ID: &str = "app-settings";

thread_local! {
	static APP: RefCell<Option<MountedApp<WebDocument, BrowserHistory>>> = const { RefCell::new(None) };
}

impl From<AppError> for JsValue {
	fn from(error: AppError) -> Self {
		JsValue::from_str(&error.to_string())
	}
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	// Set panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = WebDocument::current().map_err(AppError::from)?;
	let history = BrowserHistory::current().map_err(AppError::from)?;

	let settings = AppSettings::from_document(&document, SETTINGS_ELEMENT_ID).unwrap_or_else(|e| {
		warn_log!("Ignoring #{}: {}", SETTINGS_ELEMENT_ID, e);
		AppSettings::default()
	});

	let mounted = App::new(settings, document, history).mount()?;
	APP.with(|slot| *slot.borrow_mut() = Some(mounted));

	Ok(())
}
