use crate::{
	components::{ErrorMessage, Spinner},
	connection::{complete_callback, use_connection_client, BrowserNavigator, CallbackOutcome},
	page::Route,
	task::CancelFlag,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Where the Nylas authorization page returns to.
#[function_component]
pub fn NylasCallback() -> Html {
	let outcome = use_state_eq(CallbackOutcome::default);
	let client = use_connection_client();
	let navigator = use_navigator();

	use_effect_with(client, {
		let outcome = outcome.setter();
		move |client| {
			let cancel = CancelFlag::new();
			match client.get() {
				Ok(client) => {
					let client = client.clone();
					let navigator = BrowserNavigator::from(navigator);
					let cancel = cancel.clone();
					let outcome = Callback::from(move |value: CallbackOutcome| outcome.set(value));
					spawn_local(async move {
						complete_callback(&*client, &navigator, &cancel, &outcome).await;
					});
				}
				Err(err) => outcome.set(CallbackOutcome::Failed(err.to_string())),
			}
			move || cancel.cancel()
		}
	});

	match &*outcome {
		CallbackOutcome::Pending => html! {
			<div class="integration-page">
				<h1>{"Connecting to Nylas…"}</h1>
				<p><Spinner small={true} />{" Completing sign-in, please wait."}</p>
			</div>
		},
		CallbackOutcome::Failed(message) => html! {
			<div class="integration-page">
				<h1>{"Connection failed"}</h1>
				<ErrorMessage text={message.clone()} />
				<Link<Route> classes="nav-link" to={Route::Integration}>{"Back to Integration"}</Link<Route>>
			</div>
		},
		CallbackOutcome::Succeeded => html!(),
	}
}
