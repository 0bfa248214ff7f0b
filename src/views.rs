//! Page views rendered into the content region.

use budget_pages::builder::html::h2;
use budget_pages::component::View;

/// `/`
pub fn dashboard() -> View {
	h2().child("Dashboard").into()
}

/// `/budgets`
pub fn budgets() -> View {
	h2().child("Presupuestos").into()
}

/// `/transactions`
pub fn transactions() -> View {
	h2().child("Transacciones").into()
}

/// `/reports`
pub fn reports() -> View {
	h2().child("Reportes").into()
}

/// Any unregistered path.
pub fn not_found() -> View {
	h2().child("404 - Página no encontrada").into()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(dashboard(), "<h2>Dashboard</h2>")]
	#[case(budgets(), "<h2>Presupuestos</h2>")]
	#[case(transactions(), "<h2>Transacciones</h2>")]
	#[case(reports(), "<h2>Reportes</h2>")]
	#[case(not_found(), "<h2>404 - Página no encontrada</h2>")]
	fn test_view_markup(#[case] view: View, #[case] html: &str) {
		assert_eq!(view.render_to_string(), html);
	}
}
