//! HTML element constructors.

use crate::component::ElementView;
use std::borrow::Cow;

/// `<a href="...">`
pub fn a(href: impl Into<Cow<'static, str>>) -> ElementView {
	ElementView::new("a").attr("href", href)
}

/// `<div>`
pub fn div() -> ElementView {
	ElementView::new("div")
}

/// `<h1>`
pub fn h1() -> ElementView {
	ElementView::new("h1")
}

/// `<h2>`
pub fn h2() -> ElementView {
	ElementView::new("h2")
}

/// `<header>`
pub fn header() -> ElementView {
	ElementView::new("header")
}

/// `<main>`
pub fn main() -> ElementView {
	ElementView::new("main")
}

/// `<nav>`
pub fn nav() -> ElementView {
	ElementView::new("nav")
}

/// `<script>`
pub fn script() -> ElementView {
	ElementView::new("script")
}

/// `<span>`
pub fn span() -> ElementView {
	ElementView::new("span")
}
