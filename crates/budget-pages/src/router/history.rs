//! Navigation context: the current location and the History API.
//!
//! [`NavigationContext`] is the injected stand-in for `window.location` and
//! `window.history`. [`BrowserHistory`] implements it on WASM;
//! [`crate::testing::MemoryHistory`] implements it in memory.

use super::error::RouterError;
use std::rc::Rc;

/// Handler invoked on back/forward navigation.
pub type PopStateHandler = Rc<dyn Fn()>;

/// Why a render pass ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// First render at startup.
	Initial,
	/// A new entry was pushed (intercepted click or programmatic navigation).
	Push,
	/// The browser moved through history (back/forward).
	Pop,
}

impl NavigationType {
	/// Returns a short lowercase label, used in logs.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Initial => "initial",
			Self::Push => "push",
			Self::Pop => "pop",
		}
	}
}

impl std::fmt::Display for NavigationType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Access to the page's location and session history.
pub trait NavigationContext: Clone + 'static {
	/// Path component of the current location (`location.pathname`).
	fn current_path(&self) -> String;

	/// Origin of the page (`location.origin`), e.g. `http://localhost:5173`.
	fn origin(&self) -> String;

	/// Full current location, used as the base for resolving relative hrefs.
	fn location_href(&self) -> String {
		format!("{}{}", self.origin(), self.current_path())
	}

	/// Pushes `path` as a new history entry without reloading the page.
	///
	/// This does not notify pop-state listeners.
	fn push_state(&self, path: &str) -> Result<(), RouterError>;

	/// Subscribes to back/forward navigation.
	fn on_pop_state(&self, handler: PopStateHandler) -> Result<(), RouterError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{NavigationContext, PopStateHandler};
	use crate::dom::web::js_error;
	use crate::router::error::RouterError;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;

	/// `window.location` / `window.history` of the running page.
	#[derive(Debug, Clone)]
	pub struct BrowserHistory {
		window: web_sys::Window,
	}

	impl BrowserHistory {
		/// Returns the history of the current window.
		pub fn current() -> Result<Self, RouterError> {
			let window = web_sys::window()
				.ok_or_else(|| RouterError::NavigationFailed("No window object".to_string()))?;
			Ok(Self { window })
		}
	}

	impl NavigationContext for BrowserHistory {
		fn current_path(&self) -> String {
			self.window
				.location()
				.pathname()
				.unwrap_or_else(|_| "/".to_string())
		}

		fn origin(&self) -> String {
			self.window.location().origin().unwrap_or_default()
		}

		fn location_href(&self) -> String {
			self.window
				.location()
				.href()
				.unwrap_or_else(|_| format!("{}{}", self.origin(), self.current_path()))
		}

		fn push_state(&self, path: &str) -> Result<(), RouterError> {
			let history = self
				.window
				.history()
				.map_err(|e| RouterError::NavigationFailed(js_error(e)))?;
			history
				.push_state_with_url(&JsValue::NULL, "", Some(path))
				.map_err(|e| RouterError::NavigationFailed(js_error(e)))
		}

		fn on_pop_state(&self, handler: PopStateHandler) -> Result<(), RouterError> {
			let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
				handler();
			}) as Box<dyn FnMut(_)>);

			self.window
				.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
				.map_err(|e| RouterError::NavigationFailed(js_error(e)))?;
			// Keep the closure alive for the lifetime of the page
			closure.forget();
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NavigationType::Initial, "initial")]
	#[case(NavigationType::Push, "push")]
	#[case(NavigationType::Pop, "pop")]
	fn test_navigation_type_labels(#[case] nav: NavigationType, #[case] label: &str) {
		assert_eq!(nav.as_str(), label);
		assert_eq!(nav.to_string(), label);
	}
}
