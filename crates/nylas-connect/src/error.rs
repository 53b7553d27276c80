use std::sync::Arc;
use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	/// The SDK rejected or threw; carries the exception's message when it had one.
	#[error("{}", .0.as_deref().unwrap_or("Nylas Connect failed without a message"))]
	Sdk(Option<String>),
	#[error(transparent)]
	Deserialization(Arc<serde_wasm_bindgen::Error>),
	#[error("expected {0} from Nylas Connect")]
	UnexpectedValue(&'static str),
}

impl Error {
	/// The human-readable message of the failure, if the failure had one.
	pub fn message(&self) -> Option<String> {
		match self {
			Self::Sdk(message) => message.clone(),
			other => Some(other.to_string()),
		}
	}
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
/// `message`, falling back to its `error_description`. Blank messages count as none.
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
	fn sdk_message_passes_through() {
		let error = Error::Sdk(Some("invalid_grant".into()));
		assert_eq!(error.message().as_deref(), Some("invalid_grant"));
		assert_eq!(error.to_string(), "invalid_grant");
	}

	#[test]
	fn sdk_without_message() {
		let error = Error::Sdk(None);
		assert_eq!(error.message(), None);
		assert_eq!(error.to_string(), "Nylas Connect failed without a message");
	}

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
