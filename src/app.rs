//! Application bootstrap
//!
//! [`App::mount`] brings the page up in a fixed order: the shell is rendered
//! into the host element first, so the router finds its content region and
//! the highlighter finds the navigation links it binds to.

use crate::routes::route_table;
use crate::settings::{AppSettings, SettingsError};
use crate::shell::shell;
use budget_pages::dom::{Document, DomError, Element};
use budget_pages::info_log;
use budget_pages::navigation::NavHighlighter;
use budget_pages::router::{NavigationContext, Router, RouterError};
use std::rc::Rc;

/// Bootstrap errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	/// The host element named by `mount_id` is missing from the page
	#[error("Mount element not found: #{0}")]
	MountNotFound(String),

	/// Router failure
	#[error(transparent)]
	Router(#[from] RouterError),

	/// DOM failure
	#[error(transparent)]
	Dom(#[from] DomError),

	/// Settings failure
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// An unmounted application.
#[derive(Debug, Clone)]
pub struct App<D: Document, N: NavigationContext> {
	settings: AppSettings,
	document: D,
	history: N,
}

impl<D: Document, N: NavigationContext> App<D, N> {
	/// Creates an application bound to `document` and `history`.
	pub fn new(settings: AppSettings, document: D, history: N) -> Self {
		Self {
			settings,
			document,
			history,
		}
	}

	/// Returns the settings.
	pub fn settings(&self) -> &AppSettings {
		&self.settings
	}

	/// Renders the shell, then starts the router and the highlighter.
	pub fn mount(self) -> Result<MountedApp<D, N>, AppError> {
		self.settings.validate()?;

		let host = self
			.document
			.get_element_by_id(&self.settings.mount_id)
			.ok_or_else(|| AppError::MountNotFound(self.settings.mount_id.clone()))?;
		host.set_view(&shell(&self.settings).into())?;

		let router = Router::new(
			route_table(),
			self.document.clone(),
			self.history.clone(),
			self.settings.content_id.clone(),
		)
		.start()?;

		let highlighter = NavHighlighter::new(
			self.document.clone(),
			self.settings.nav_link_class.clone(),
			self.settings.active_class.clone(),
		);
		let current_path = self.history.current_path();
		highlighter.start(&current_path)?;

		info_log!("Mounted {} at #{} ({})", self.settings.title, self.settings.mount_id, current_path);

		Ok(MountedApp {
			settings: self.settings,
			router,
			highlighter,
		})
	}
}

/// A running application.
///
/// Dropping it stops the router from reacting to clicks and history events.
#[derive(Debug)]
pub struct MountedApp<D: Document, N: NavigationContext> {
	settings: AppSettings,
	router: Rc<Router<D, N>>,
	highlighter: NavHighlighter<D>,
}

impl<D: Document, N: NavigationContext> MountedApp<D, N> {
	/// Returns the settings the app was mounted with.
	pub fn settings(&self) -> &AppSettings {
		&self.settings
	}

	/// Returns the router.
	pub fn router(&self) -> &Rc<Router<D, N>> {
		&self.router
	}

	/// Returns the navigation highlighter.
	pub fn highlighter(&self) -> &NavHighlighter<D> {
		&self.highlighter
	}

	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.router.current_path()
	}
}
