use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorMessageProps {
	pub text: AttrValue,
}

#[function_component]
pub fn ErrorMessage(ErrorMessageProps { text }: &ErrorMessageProps) -> Html {
	html!(<p class="error-msg text-danger">{text.clone()}</p>)
}
