//! In-memory DOM and history for running pages without a browser.
//!
//! Available on both WASM and native targets. Integration tests drive the
//! router and highlighter through these types.
//!
//! # Example
//!
//! ```
//! use budget_pages::builder::html::{a, div};
//! use budget_pages::dom::Document;
//! use budget_pages::router::NavigationContext;
//! use budget_pages::testing::{MemoryDocument, MemoryHistory};
//!
//! let document = MemoryDocument::with_body(div().id("app").child(a("/budgets").child("Budgets")));
//! let history = MemoryHistory::new("http://localhost:5173", "/");
//!
//! assert!(document.get_element_by_id("app").is_some());
//! assert_eq!(history.current_path(), "/");
//! ```

mod dom;
mod history;

pub use dom::{MemoryDocument, MemoryElement};
pub use history::MemoryHistory;
