use super::{Action, BrowserNavigator, Controller, IdentityToken, Parts};
use crate::config::{origin, CONFIG};
use futures::future::LocalBoxFuture;
use identity::Auth;
use nylas_connect::{ConnectionClient, NylasConnect, TokenSource};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

/// The connection client shared by the views that need one, or why it could not be built.
#[derive(Clone)]
pub struct ClientHandle(Rc<Result<Rc<dyn ConnectionClient>, nylas_connect::Error>>);

impl PartialEq for ClientHandle {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl ClientHandle {
	pub fn get(&self) -> Result<&Rc<dyn ConnectionClient>, &nylas_connect::Error> {
		(*self.0).as_ref()
	}
}

/// Builds the connection client once per identity context. Its identity token source
/// resolves to nothing when the user has no Auth0 session.
#[hook]
pub fn use_connection_client() -> ClientHandle {
	let auth = use_context::<Auth>().unwrap();
	let client = use_memo(auth, |auth| {
		let auth = auth.clone();
		let identity_token: TokenSource = Rc::new(move || -> LocalBoxFuture<'static, Option<String>> {
			let pending = auth.access_token();
			Box::pin(async move {
				match pending.await {
					Ok(token) => Some(token),
					Err(err) => {
						log::debug!(target: "nylas", "No identity token available: {err}");
						None
					}
				}
			})
		});
		let config = CONFIG.nylas.connection_config(&origin(), identity_token);
		match NylasConnect::new(config) {
			Ok(client) => Ok(Rc::new(client) as Rc<dyn ConnectionClient>),
			Err(err) => {
				log::error!(target: "nylas", "Failed to create the connection client: {err}");
				Err(err)
			}
		}
	});
	ClientHandle(client)
}

/// A controller bound to `sink` for the lifetime of the calling component.
#[hook]
pub fn use_controller(sink: Callback<Action>) -> Rc<Result<Controller, nylas_connect::Error>> {
	let auth = use_context::<Auth>().unwrap();
	let client = use_connection_client();
	let navigator = use_navigator();
	use_memo(client, move |client| {
		let client = client.get().map_err(Clone::clone)?.clone();
		let identity_token: IdentityToken = Rc::new(move || auth.access_token());
		let parts = Parts {
			client,
			navigator: Rc::new(BrowserNavigator::from(navigator)),
			transport: Rc::new(reqwest::Client::new()),
			identity_token,
			api_url: CONFIG.nylas.api_url.to_owned(),
		};
		Ok(Controller::new(parts, sink))
	})
}
