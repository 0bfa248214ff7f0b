//! Route table

use crate::views;
use budget_pages::router::RouteTable;

/// Returns the application's routes.
///
/// Paths are matched exactly; everything else renders [`views::not_found`].
pub fn route_table() -> RouteTable {
	RouteTable::new()
		.named_route("dashboard", "/", views::dashboard)
		.named_route("budgets", "/budgets", views::budgets)
		.named_route("transactions", "/transactions", views::transactions)
		.named_route("reports", "/reports", views::reports)
		.not_found(views::not_found)
}
