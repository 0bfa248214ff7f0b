//! HTML Builder API
//!
//! Free functions that start an [`ElementView`](crate::component::ElementView)
//! for common tags, so view code reads close to the markup it produces.
//!
//! ## Example
//!
//! ```ignore
//! use budget_pages::builder::html::{a, nav};
//!
//! let menu = nav()
//!     .class("nav")
//!     .child(a("/").class("nav-link").child("Dashboard"));
//! ```

pub mod html;

pub use html::*;
