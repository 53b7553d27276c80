use identity::Status;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Home() -> Html {
	let status = use_store_value::<Status>();
	match status.user().filter(|_| status.is_authenticated()) {
		Some(user) => html! {<>
			<h1>{"User Profile"}</h1>
			<pre>{user.to_pretty_json()}</pre>
		</>},
		None => html!(<h1>{"Welcome"}</h1>),
	}
}
