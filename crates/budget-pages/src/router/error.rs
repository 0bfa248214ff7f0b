//! Error types for client-side routing.

use crate::dom::DomError;

/// Error type for router operations.
///
/// An unmatched path is not an error: it renders the not-found view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// The content region the router renders into is missing.
	#[error("Router outlet not found: #{0}")]
	OutletNotFound(String),
	/// Invalid route name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Pushing onto or reading from history failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// A location or href could not be parsed as a URL.
	#[error("Invalid URL '{url}': {reason}")]
	InvalidUrl {
		/// The offending input.
		url: String,
		/// Parser message.
		reason: String,
	},
	/// A DOM operation failed.
	#[error(transparent)]
	Dom(#[from] DomError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::OutletNotFound("main-content".to_string()).to_string(),
			"Router outlet not found: #main-content"
		);
		assert_eq!(
			RouterError::InvalidRouteName("test".to_string()).to_string(),
			"Invalid route name: test"
		);
		assert_eq!(
			RouterError::InvalidUrl {
				url: "nope".to_string(),
				reason: "relative URL without a base".to_string(),
			}
			.to_string(),
			"Invalid URL 'nope': relative URL without a base"
		);
	}

	#[rstest]
	fn test_dom_error_converts_transparently() {
		let err: RouterError = DomError::Operation("boom".to_string()).into();
		assert_eq!(err.to_string(), "DOM operation failed: boom");
		assert!(matches!(err, RouterError::Dom(_)));
	}
}
