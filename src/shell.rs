//! Static page shell: title header, navigation menu and content region.

use crate::settings::AppSettings;
use budget_pages::builder::html::{a, div, h1, header, main, nav};
use budget_pages::component::ElementView;

/// Navigation menu entries as `(href, label)`, in display order.
pub fn nav_items() -> [(&'static str, &'static str); 4] {
	[
		("/", "Dashboard"),
		("/budgets", "Budgets"),
		("/transactions", "Transactions"),
		("/reports", "Reports"),
	]
}

/// Builds the shell markup.
///
/// The content region is left empty; the router fills it on start.
pub fn shell(settings: &AppSettings) -> ElementView {
	let links = nav_items()
		.into_iter()
		.map(|(href, label)| a(href).class(settings.nav_link_class.clone()).child(label));

	div()
		.class("container")
		.child(
			header()
				.class("py-3")
				.child(h1().child(settings.title.clone()))
				.child(nav().class("nav").children(links)),
		)
		.child(main().id(settings.content_id.clone()).class("py-4"))
}
