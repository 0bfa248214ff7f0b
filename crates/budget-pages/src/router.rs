//! Client-side routing.
//!
//! A hand-rolled single-page router: exact-path lookup, same-origin anchor
//! interception and History API integration.
//!
//! ## Example
//!
//! ```ignore
//! use budget_pages::router::{RouteTable, Router};
//! use budget_pages::component::View;
//!
//! let table = RouteTable::new()
//!     .route("/", || View::text("Home"))
//!     .not_found(|| View::text("404"));
//!
//! let router = Router::new(table, document, history, "main-content").start()?;
//! ```

mod core;
mod error;
mod history;
mod link;

pub use self::core::{Route, RouteTable, Router, ViewFactory};
pub use error::RouterError;
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{NavigationContext, NavigationType, PopStateHandler};
pub use link::resolve_same_origin;
