//! Budget Optimizer web client
//!
//! A single-page client with a static header and navigation menu, an
//! exact-path router that swaps the content region without page reloads, and
//! active-link highlighting in the menu.
//!
//! - [`settings`]: identifiers and labels, optionally read from the page
//! - [`shell`]: header, navigation menu and empty content region
//! - [`views`]: one heading per page, plus the 404 view
//! - [`routes`]: the path-to-view table
//! - [`app`]: mounts the shell, then starts the router and highlighter
//!
//! On `wasm32` the crate also exports a `#[wasm_bindgen(start)]` entry point
//! that mounts into `#app`.
//!
//! ## Example
//!
//! ```
//! use budget_optimizer::app::App;
//! use budget_optimizer::settings::AppSettings;
//! use budget_pages::builder::html::div;
//! use budget_pages::dom::{Document, Element};
//! use budget_pages::testing::{MemoryDocument, MemoryHistory};
//!
//! let document = MemoryDocument::with_body(div().id("app"));
//! let history = MemoryHistory::new("http://localhost:5173", "/budgets");
//!
//! let mounted = App::new(AppSettings::default(), document.clone(), history)
//!     .mount()
//!     .unwrap();
//!
//! let content = document.get_element_by_id("main-content").unwrap();
//! assert_eq!(content.text_content(), "Presupuestos");
//! assert_eq!(mounted.highlighter().active_links().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod routes;
pub mod settings;
pub mod shell;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod client;

pub use app::{App, AppError, MountedApp};
pub use settings::{AppSettings, SettingsError};
