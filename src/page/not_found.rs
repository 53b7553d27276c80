use crate::page::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn NotFound() -> Html {
	html! {<>
		<p>{"The page you are looking for does not exist."}</p>
		<Link<Route> classes="nav-link" to={Route::Home}>{"Back to Home"}</Link<Route>>
	</>}
}
