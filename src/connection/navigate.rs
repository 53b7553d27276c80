use crate::page::Route;
use yew_router::prelude::Navigator;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NavigationError(pub String);

/// The two ways the connection flow moves the browser.
pub trait Navigate {
	/// Leaves the application for an external page.
	fn assign(&self, url: &str) -> Result<(), NavigationError>;

	/// Swaps the current history entry for `route`, so back-navigation skips it.
	fn replace(&self, route: Route);
}

pub struct BrowserNavigator(Option<Navigator>);

impl From<Option<Navigator>> for BrowserNavigator {
	fn from(value: Option<Navigator>) -> Self {
		Self(value)
	}
}

impl Navigate for BrowserNavigator {
	fn assign(&self, url: &str) -> Result<(), NavigationError> {
		gloo_utils::window()
			.location()
			.set_href(url)
			.map_err(|err| NavigationError(nylas_connect::Error::from(err).to_string()))
	}

	fn replace(&self, route: Route) {
		match &self.0 {
			Some(navigator) => navigator.replace(&route),
			None => log::error!(target: "integration", "No router available to replace the location with {route:?}"),
		}
	}
}
