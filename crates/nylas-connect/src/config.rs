use futures_util::future::LocalBoxFuture;
use serde::Serialize;
use std::rc::Rc;

/// Supplies the identity provider's bearer token to the SDK.
/// Resolves to `None` when no token is available; that is never an error for the SDK.
pub type TokenSource = Rc<dyn Fn() -> LocalBoxFuture<'static, Option<String>>>;

#[derive(Clone)]
pub struct Config {
	pub client_id: String,
	/// Where the hosted authorization page sends the browser back to.
	pub redirect_uri: String,
	pub api_url: String,
	pub identity_token: TokenSource,
}

/// How `connect` hands control to the hosted authorization page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectMethod {
	/// The SDK returns the authorization url and the caller navigates the tab to it.
	Inline,
}

#[derive(Serialize)]
pub(crate) struct ConnectOptions {
	pub method: ConnectMethod,
}
