use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SpinnerProps {
	#[prop_or_default]
	pub small: bool,
}

#[function_component]
pub fn Spinner(SpinnerProps { small }: &SpinnerProps) -> Html {
	html! {
		<div class={classes!("spinner-border", small.then_some("spinner-border-sm"))} role="status">
			<span class="visually-hidden">{"Loading..."}</span>
		</div>
	}
}
