use crate::{client::Client, Auth, Config, Error, Login, Status};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	pub config: Config,
	#[prop_or_default]
	pub children: Children,
}

#[function_component]
pub fn Provider(ProviderProps { config, children }: &ProviderProps) -> Html {
	let dispatch = use_dispatch::<Status>();
	let client = use_memo(config.clone(), |config| match Client::new(config.clone()) {
		Ok(client) => Some(Rc::new(client)),
		Err(err) => {
			log::error!(target: "identity", "Failed to create the Auth0 client: {err}");
			None
		}
	});

	yew_hooks::use_async_with_options(
		{
			let client = (*client).clone();
			let dispatch = dispatch.clone();
			async move {
				let status = match client {
					None => Status::failed(Error::Unavailable),
					Some(client) => match client.initialize().await {
						Ok(Some(user)) => Status::signed_in(user),
						Ok(None) => Status::anonymous(),
						Err(err) => {
							log::error!(target: "identity", "Failed to restore the session: {err}");
							Status::failed(err)
						}
					},
				};
				log::debug!(target: "identity", "Authenticated: {}", status.is_authenticated());
				dispatch.set(status);
				Ok(()) as Result<(), ()>
			}
		},
		yew_hooks::UseAsyncOptions::enable_auto(),
	);

	let login = use_callback(client.clone(), {
		let dispatch = dispatch.clone();
		move |login: Login, client: &Rc<Option<Rc<Client>>>| {
			let Some(client) = (**client).clone() else {
				return;
			};
			let dispatch = dispatch.clone();
			log::debug!(target: "identity", "Redirecting to login ({login:?})");
			spawn_local(async move {
				if let Err(err) = client.login(login.screen_hint()).await {
					log::error!(target: "identity", "Login failed: {err}");
					dispatch.reduce_mut(|status| status.error = Some(err.to_string()));
				}
			});
		}
	});
	let logout = use_callback(client.clone(), move |_: (), client: &Rc<Option<Rc<Client>>>| {
		let Some(client) = (**client).clone() else {
			return;
		};
		let dispatch = dispatch.clone();
		spawn_local(async move {
			let return_to = gloo_utils::window().location().origin().unwrap_or_default();
			if let Err(err) = client.logout(&return_to).await {
				log::error!(target: "identity", "Logout failed: {err}");
				dispatch.reduce_mut(|status| status.error = Some(err.to_string()));
			}
		});
	});

	let auth = Auth {
		client: (*client).clone(),
		login,
		logout,
	};
	html! {
		<ContextProvider<Auth> context={auth}>
			{children.clone()}
		</ContextProvider<Auth>>
	}
}
