use crate::{
	components::{ErrorMessage, Spinner},
	connection::{use_controller, Action, ConnectionState, Controller, Phase, ProbeKind, ProbeState},
};
use std::{future::Future, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type ControllerHandle = Rc<Result<Controller, nylas_connect::Error>>;

fn spawn<F, Fut>(controller: &ControllerHandle, operation: F)
where
	F: FnOnce(Controller) -> Fut,
	Fut: Future<Output = ()> + 'static,
{
	if let Ok(controller) = &**controller {
		spawn_local(operation(controller.clone()));
	}
}

#[function_component]
pub fn Integration() -> Html {
	let state = use_reducer(ConnectionState::default);
	let sink = {
		let dispatcher = state.dispatcher();
		Callback::from(move |action: Action| dispatcher.dispatch(action))
	};
	let controller = use_controller(sink);

	use_effect_with((*controller).as_ref().ok().cloned(), |controller| {
		let controller = controller.clone();
		if let Some(controller) = &controller {
			controller.subscribe();
			let pending = controller.clone();
			spawn_local(async move { pending.load_session().await });
		}
		move || {
			if let Some(controller) = controller {
				controller.teardown();
			}
		}
	});

	if let Err(err) = &*controller {
		return html! {
			<div class="integration-page">
				<h1>{"Integration"}</h1>
				<ErrorMessage text={err.to_string()} />
			</div>
		};
	}

	if matches!(state.phase(), Phase::Idle | Phase::LoadingSession) {
		return html! {
			<div class="integration-page">
				<h1>{"Integration"}</h1>
				<p><Spinner small={true} />{" Loading Nylas connection status…"}</p>
			</div>
		};
	}

	let on_connect = Callback::from({
		let controller = controller.clone();
		move |_: MouseEvent| spawn(&controller, |controller| async move { controller.connect().await })
	});
	let on_disconnect = Callback::from({
		let controller = controller.clone();
		move |_: MouseEvent| spawn(&controller, |controller| async move { controller.disconnect().await })
	});
	let on_probe = Callback::from({
		let controller = controller.clone();
		let session = state.session().cloned();
		move |kind: ProbeKind| {
			let Some(session) = session.clone() else {
				return;
			};
			spawn(&controller, move |controller| async move { controller.probe(kind, session).await });
		}
	});

	let body = match state.session() {
		Some(session) => html! {
			<div class="integration-status-wrap">
				<div class="integration-status d-flex align-items-center mb-3">
					<p class="integration-connected mb-0 me-3">
						{"Connected as "}<strong>{session.display_email()}</strong>
					</p>
					<button
						type="button" class="btn btn-outline-secondary"
						disabled={!state.can_disconnect()}
						onclick={on_disconnect}
					>
						{match state.is_disconnecting() {
							true => "Disconnecting…",
							false => "Disconnect",
						}}
					</button>
				</div>
				{ProbeKind::SessionToken.view(state.probe(ProbeKind::SessionToken), &on_probe)}
				{ProbeKind::IdentityCorrelated.view(state.probe(ProbeKind::IdentityCorrelated), &on_probe)}
			</div>
		},
		None => html! {
			<button type="button" class="btn btn-primary" disabled={!state.can_connect()} onclick={on_connect}>
				{match state.is_connecting() {
					true => "Connecting…",
					false => "Connect with Nylas",
				}}
			</button>
		},
	};

	html! {
		<div class="integration-page">
			<h1>{"Integration"}</h1>
			<section class="integration-card card card-body">
				<h2>{"Nylas"}</h2>
				<p class="integration-desc">{"Connect your email, calendar, or contacts via Nylas."}</p>
				{state.error().map(|message| html!(<ErrorMessage text={message.to_owned()} />))}
				{body}
			</section>
		</div>
	}
}

impl ProbeKind {
	fn view(self, probe: &ProbeState, on_probe: &Callback<ProbeKind>) -> Html {
		html! {
			<div class="integration-api-test mb-3">
				{probe.error.as_ref().map(|message| html!(<ErrorMessage text={message.clone()} />))}
				<button
					type="button" class="btn btn-primary"
					disabled={probe.loading}
					onclick={on_probe.reform(move |_: MouseEvent| self)}
				>
					{match probe.loading {
						true => "Calling…",
						false => self.label(),
					}}
				</button>
				{probe.output.as_ref().map(|output| html! {
					<pre class="api-output mt-2">{output.to_pretty_json()}</pre>
				})}
			</div>
		}
	}
}
