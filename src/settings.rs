//! Application settings
//!
//! Settings are read from a JSON `<script type="application/json">` element
//! embedded in the host page. Every field is optional; missing fields take
//! their defaults.

use budget_pages::dom::{Document, Element};
use serde::{Deserialize, Serialize};

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings document is not valid JSON for [`AppSettings`]
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] serde_json::Error),

	/// A field holds an unusable value
	#[error("Invalid value for '{field}': {reason}")]
	Invalid {
		/// The offending field
		field: &'static str,
		/// Why the value was rejected
		reason: String,
	},
}

/// Identifiers and labels the client is mounted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
	/// Heading shown in the page header
	pub title: String,

	/// Id of the host element the shell is mounted into
	pub mount_id: String,

	/// Id of the content region the router renders into
	pub content_id: String,

	/// Class carried by every navigation link
	pub nav_link_class: String,

	/// Class that marks the active navigation link
	pub active_class: String,
}

impl Default for AppSettings {
	fn default() -> Self {
		Self {
			title: "Budget Optimizer".to_string(),
			mount_id: "app".to_string(),
			content_id: "main-content".to_string(),
			nav_link_class: "nav-link".to_string(),
			active_class: "active".to_string(),
		}
	}
}

impl AppSettings {
	/// Create settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from JSON and validate them
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from the JSON text of the element with id `element_id`.
	///
	/// Returns the defaults when the page carries no such element.
	pub fn from_document<D: Document>(document: &D, element_id: &str) -> Result<Self, SettingsError> {
		match document.get_element_by_id(element_id) {
			Some(element) => Self::from_json(&element.text_content()),
			None => Ok(Self::default()),
		}
	}

	/// Validate settings
	///
	pub fn validate(&self) -> Result<(), SettingsError> {
		let names = [
			("mount_id", &self.mount_id),
			("content_id", &self.content_id),
			("nav_link_class", &self.nav_link_class),
			("active_class", &self.active_class),
		];
		for (field, value) in names {
			if value.is_empty() {
				return Err(SettingsError::Invalid {
					field,
					reason: "must not be empty".to_string(),
				});
			}
			if value.chars().any(char::is_whitespace) {
				return Err(SettingsError::Invalid {
					field,
					reason: format!("'{}' must not contain whitespace", value),
				});
			}
		}

		if self.mount_id == self.content_id {
			return Err(SettingsError::Invalid {
				field: "content_id",
				reason: "must differ from mount_id".to_string(),
			});
		}

		Ok(())
	}
}
