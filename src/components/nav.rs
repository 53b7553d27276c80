use crate::page::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NavLinkProps {
	pub to: Route,
	#[prop_or_default]
	pub children: Children,
}

/// A navbar link, marked `active` while its route (or one beneath it) is shown.
#[function_component]
pub fn NavLink(NavLinkProps { to, children }: &NavLinkProps) -> Html {
	let current = use_route::<Route>();
	let active = current.is_some_and(|current| to.is_within(&current));
	html! {
		<Link<Route> classes={classes!("nav-link", active.then_some("active"))} to={*to}>
			{children.clone()}
		</Link<Route>>
	}
}
