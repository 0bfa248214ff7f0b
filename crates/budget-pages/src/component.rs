//! View tree for rendering.
//!
//! Views are plain data: they are rendered to escaped HTML for the browser
//! and mounted structurally by the in-memory DOM.

mod into_view;

pub use into_view::{ElementView, IntoView, View};
pub(crate) use into_view::html_escape;
