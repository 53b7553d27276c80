use std::sync::Arc;
use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	/// The SDK rejected or threw, e.g. `login_required` when no session is active.
	#[error("{}", .0.as_deref().unwrap_or("Auth0 failed without a message"))]
	Sdk(Option<String>),
	#[error(transparent)]
	Deserialization(Arc<serde_wasm_bindgen::Error>),
	#[error("the Auth0 client could not be created")]
	Unavailable,
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Sdk(js_message(&value))
	}
}

impl From<serde_wasm_bindgen::Error> for Error {
	fn from(value: serde_wasm_bindgen::Error) -> Self {
		Self::Deserialization(Arc::new(value))
	}
}

/// Reads a message out of a thrown value: an `Error`, a bare string, or an object's
/// `message`. Auth0's `GenericError` also carries `error_description`, used when the
/// message is missing. Blank messages count as none.
fn js_message(value: &JsValue) -> Option<String> {
	let message = if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		Some(String::from(error.message()))
	} else if let Some(text) = value.as_string() {
		Some(text)
	} else {
		property(value, "message")
	};
	first_message([message, property(value, "error_description")])
}

fn property(value: &JsValue, name: &str) -> Option<String> {
	if !value.is_object() {
		return None;
	}
	js_sys::Reflect::get(value, &JsValue::from_str(name)).ok()?.as_string()
}

fn first_message(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
	candidates.into_iter().flatten().find(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn message_before_description() {
		let pick = |message: Option<&str>, description: Option<&str>| {
			first_message([message.map(str::to_owned), description.map(str::to_owned)])
		};
		assert_eq!(pick(Some("Login required"), Some("login_required")).as_deref(), Some("Login required"));
		assert_eq!(pick(None, Some("login_required")).as_deref(), Some("login_required"));
		assert_eq!(pick(Some("  "), Some("login_required")).as_deref(), Some("login_required"));
		assert_eq!(pick(Some(""), None), None);
	}
}
