//! Budget Pages - minimal WASM frontend toolkit
//!
//! The pieces a small single-page client needs, and nothing more:
//!
//! - [`component`]: immutable view tree rendered to escaped HTML
//! - [`builder`]: element constructors for writing views
//! - [`dom`]: `Document`/`Element` abstraction with a browser implementation
//! - [`router`]: exact-path client router with same-origin link interception
//! - [`navigation`]: active-link highlighting for navigation menus
//! - [`testing`]: in-memory document and history for running without a browser
//! - [`logging`]: console/`tracing` logging macros
//!
//! Browser state (location, history, the DOM tree) is never read from global
//! scope by the router or the highlighter. It is injected through
//! [`dom::Document`] and [`router::NavigationContext`].
//!
//! ## Example
//!
//! ```
//! use budget_pages::builder::html::{a, div, h2};
//! use budget_pages::dom::{Document, Element};
//! use budget_pages::router::{NavigationContext, RouteTable, Router};
//! use budget_pages::testing::{MemoryDocument, MemoryHistory};
//!
//! let document = MemoryDocument::with_body(
//!     div()
//!         .child(a("/about").id("about-link").child("About"))
//!         .child(div().id("content")),
//! );
//! let history = MemoryHistory::new("http://localhost:5173", "/");
//! let table = RouteTable::new()
//!     .route("/", || h2().child("Home").into())
//!     .route("/about", || h2().child("About").into());
//!
//! let router = Router::new(table, document.clone(), history.clone(), "content")
//!     .start()
//!     .unwrap();
//! assert_eq!(router.current_path(), "/");
//!
//! let click = document.click_id("about-link").unwrap();
//! assert!(click.is_default_prevented());
//! assert_eq!(history.current_path(), "/about");
//! assert_eq!(document.get_element_by_id("content").unwrap().text_content(), "About");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod component;
pub mod dom;
pub mod logging;
pub mod navigation;
pub mod router;
pub mod testing;

pub use component::{ElementView, IntoView, View};
pub use dom::{ClickEvent, ClickHandler, Document, DomError, Element};
pub use navigation::NavHighlighter;
pub use router::{NavigationContext, NavigationType, Route, RouteTable, Router, RouterError};

// Logging macros are exported via #[macro_export]:
// budget_pages::debug_log!, budget_pages::info_log!, ...

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
