use crate::{
	components::{ErrorMessage, NavLink},
	config::{origin, CONFIG},
	page,
};
use identity::{Auth, Login, Status};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Mounts the store root and the identity provider around the application.
#[function_component]
pub fn Root() -> Html {
	let config = use_memo((), |_| CONFIG.auth0.identity_config(&origin()));
	html! {
		<YewduxRoot>
			<identity::Provider config={(*config).clone()}>
				<App />
			</identity::Provider>
		</YewduxRoot>
	}
}

#[function_component]
pub fn App() -> Html {
	let status = use_store_value::<Status>();
	if status.is_loading() {
		return html!("Loading...");
	}
	html! {
		<BrowserRouter>
			<Header />
			<main class="container py-3">
				{status.error().map(|message| html!(<ErrorMessage text={format!("Error: {message}")} />))}
				<Switch<Route> render={Route::switch} />
			</main>
		</BrowserRouter>
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/integration")]
	Integration,
	#[at("/integration/callback")]
	IntegrationCallback,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	/// Whether a nav link to `self` should be highlighted while `current` is shown.
	pub fn is_within(&self, current: &Route) -> bool {
		match self {
			Self::Integration => matches!(current, Self::Integration | Self::IntegrationCallback),
			_ => self == current,
		}
	}

	fn switch(self) -> Html {
		match self {
			Self::Home => html!(<page::Home />),
			Self::Integration => html!(<page::Integration />),
			Self::IntegrationCallback => html!(<page::NylasCallback />),
			Self::NotFound => html!(<page::NotFound />),
		}
	}
}

#[function_component]
fn Header() -> Html {
	let auth = use_context::<Auth>().unwrap();
	let status = use_store_value::<Status>();
	let account = match status.user().filter(|_| status.is_authenticated()) {
		Some(user) => {
			let email = user.email().unwrap_or_default().to_owned();
			html! {<>
				<span class="navbar-text text-truncate me-2" title={email.clone()}>{email}</span>
				<button type="button" class="btn btn-outline-secondary" onclick={auth.logout_callback().reform(|_: MouseEvent| ())}>
					{"Logout"}
				</button>
			</>}
		}
		None => html! {<>
			<button
				type="button" class="btn btn-outline-secondary me-2"
				onclick={auth.login_callback().reform(|_: MouseEvent| Login::SignUp)}
			>
				{"Signup"}
			</button>
			<button
				type="button" class="btn btn-primary"
				onclick={auth.login_callback().reform(|_: MouseEvent| Login::SignIn)}
			>
				{"Login"}
			</button>
		</>},
	};
	html! {
		<header>
			<nav class="navbar navbar-expand-lg sticky-top bg-body-tertiary">
				<div class="container-fluid">
					<span class="navbar-brand">{"Auth0 Sample"}</span>
					<ul class="navbar-nav">
						<li class="nav-item">
							<NavLink to={Route::Home}>{"Home"}</NavLink>
						</li>
						<li class="nav-item">
							<NavLink to={Route::Integration}>{"Integration"}</NavLink>
						</li>
					</ul>
					<div class="d-flex align-items-center ms-auto">
						{account}
					</div>
				</div>
			</nav>
		</header>
	}
}
