//! Anchor href resolution for click interception.

use super::error::RouterError;
use url::Url;

fn parse(input: &str) -> Result<Url, RouterError> {
	Url::parse(input).map_err(|e| RouterError::InvalidUrl {
		url: input.to_string(),
		reason: e.to_string(),
	})
}

/// Resolves an anchor's raw `href` the way the browser does and returns the
/// target path when it stays on the application's origin.
///
/// `location` is the page's current URL (the base for relative hrefs) and
/// `origin` the application's origin. Query and fragment are dropped from the
/// returned path. Cross-origin targets and opaque origins (`mailto:`,
/// `javascript:`) yield `Ok(None)`.
///
/// # Example
///
/// ```
/// use budget_pages::router::resolve_same_origin;
///
/// let base = "http://localhost:5173/";
/// let origin = "http://localhost:5173";
/// assert_eq!(
/// 	resolve_same_origin(base, origin, "/budgets?tab=1#top").unwrap(),
/// 	Some("/budgets".to_string())
/// );
/// assert_eq!(
/// 	resolve_same_origin(base, origin, "https://example.com/budgets").unwrap(),
/// 	None
/// );
/// ```
pub fn resolve_same_origin(
	location: &str,
	origin: &str,
	href: &str,
) -> Result<Option<String>, RouterError> {
	let base = parse(location)?;
	let app_origin = parse(origin)?.origin();

	let target = base.join(href).map_err(|e| RouterError::InvalidUrl {
		url: href.to_string(),
		reason: e.to_string(),
	})?;

	if app_origin.is_tuple() && target.origin() == app_origin {
		Ok(Some(target.path().to_string()))
	} else {
		Ok(None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const ORIGIN: &str = "http://localhost:5173";

	#[rstest]
	#[case("/", Some("/"))]
	#[case("/budgets", Some("/budgets"))]
	#[case("/reports?period=month", Some("/reports"))]
	#[case("/transactions#latest", Some("/transactions"))]
	#[case("http://localhost:5173/reports", Some("/reports"))]
	#[case("budgets", Some("/budgets"))]
	#[case("https://localhost:5173/reports", None)]
	#[case("http://localhost:8080/reports", None)]
	#[case("http://localhost.evil.test:5173/reports", None)]
	#[case("https://example.com/", None)]
	#[case("mailto:team@example.com", None)]
	fn test_resolve_from_root(#[case] href: &str, #[case] expected: Option<&str>) {
		let base = format!("{}/", ORIGIN);
		assert_eq!(
			resolve_same_origin(&base, ORIGIN, href).unwrap(),
			expected.map(str::to_string)
		);
	}

	#[rstest]
	fn test_relative_href_resolves_against_current_path() {
		let base = format!("{}/reports/monthly", ORIGIN);
		assert_eq!(
			resolve_same_origin(&base, ORIGIN, "yearly").unwrap(),
			Some("/reports/yearly".to_string())
		);
		assert_eq!(
			resolve_same_origin(&base, ORIGIN, "../budgets").unwrap(),
			Some("/budgets".to_string())
		);
	}

	#[rstest]
	fn test_invalid_location_is_an_error() {
		let result = resolve_same_origin("not a url", ORIGIN, "/budgets");
		assert!(matches!(result, Err(RouterError::InvalidUrl { .. })));
	}

	#[rstest]
	fn test_unjoinable_href_is_an_error() {
		let base = format!("{}/", ORIGIN);
		let result = resolve_same_origin(&base, ORIGIN, "http://[::1");
		assert!(matches!(result, Err(RouterError::InvalidUrl { .. })));
	}
}
