//! Sign-in through the Auth0 SPA SDK.
//!
//! Mount [`Provider`] once at the application root. It restores or completes the Auth0
//! session, publishes [`Status`] as a yewdux store, and provides [`Auth`] as context.

mod auth;
pub use auth::*;
mod client;
mod error;
pub use error::*;
mod provider;
pub use provider::*;
mod redirect;
mod status;
pub use status::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	/// The Auth0 tenant domain, e.g. `example.us.auth0.com`.
	pub domain: String,
	pub client_id: String,
	/// Where Auth0 sends the browser back to after login.
	pub redirect_uri: String,
	pub audience: Option<String>,
}
