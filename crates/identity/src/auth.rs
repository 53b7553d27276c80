use crate::{client::Client, Error};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Login {
	SignIn,
	/// Opens the hosted page on its signup screen.
	SignUp,
}

impl Login {
	pub(crate) fn screen_hint(&self) -> Option<&'static str> {
		match self {
			Self::SignIn => None,
			Self::SignUp => Some("signup"),
		}
	}
}

/// Context provided by [`crate::Provider`].
#[derive(Clone, PartialEq)]
pub struct Auth {
	pub(crate) client: Option<Rc<Client>>,
	pub(crate) login: Callback<Login>,
	pub(crate) logout: Callback<()>,
}

impl Auth {
	pub fn login_callback(&self) -> &Callback<Login> {
		&self.login
	}

	pub fn logout_callback(&self) -> &Callback<()> {
		&self.logout
	}

	/// Requests the access token without user interaction.
	/// Fails when there is no active session; callers decide whether that matters.
	pub fn access_token(&self) -> LocalBoxFuture<'static, Result<String, Error>> {
		let client = self.client.clone();
		Box::pin(async move {
			let Some(client) = client else {
				return Err(Error::Unavailable);
			};
			client.access_token().await
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn signup_hints_the_signup_screen() {
		assert_eq!(Login::SignIn.screen_hint(), None);
		assert_eq!(Login::SignUp.screen_hint(), Some("signup"));
	}
}
