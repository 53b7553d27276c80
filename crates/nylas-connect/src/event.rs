use crate::{Error, Session};
use wasm_bindgen::JsValue;

/// The event names emitted through `onConnectStateChange`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectEventKind {
	ConnectSuccess,
	SignedIn,
	SignedOut,
	ConnectError,
	/// Anything else the SDK reports (`CONNECT_STARTED`, `TOKEN_REFRESHED`, ..).
	Other(String),
}

impl ConnectEventKind {
	pub fn as_str(&self) -> &str {
		match self {
			Self::ConnectSuccess => "CONNECT_SUCCESS",
			Self::SignedIn => "SIGNED_IN",
			Self::SignedOut => "SIGNED_OUT",
			Self::ConnectError => "CONNECT_ERROR",
			Self::Other(kind) => kind.as_str(),
		}
	}

	pub fn class(&self) -> EventClass {
		match self {
			Self::ConnectSuccess | Self::SignedIn => EventClass::Success,
			Self::SignedOut | Self::ConnectError => EventClass::Termination,
			Self::Other(_) => EventClass::Ignored,
		}
	}
}

impl From<&str> for ConnectEventKind {
	fn from(value: &str) -> Self {
		match value {
			"CONNECT_SUCCESS" => Self::ConnectSuccess,
			"SIGNED_IN" => Self::SignedIn,
			"SIGNED_OUT" => Self::SignedOut,
			"CONNECT_ERROR" => Self::ConnectError,
			other => Self::Other(other.to_owned()),
		}
	}
}

impl std::fmt::Display for ConnectEventKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventClass {
	/// The event carries the (possibly absent) session that is now current.
	Success,
	/// The linked account is gone or the attempt failed.
	Termination,
	Ignored,
}

/// A state-change notification, validated at the SDK boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectEvent {
	pub kind: ConnectEventKind,
	pub session: Option<Session>,
}

impl ConnectEvent {
	pub fn new(kind: ConnectEventKind, session: Option<Session>) -> Self {
		Self { kind, session }
	}

	pub fn class(&self) -> EventClass {
		self.kind.class()
	}

	/// Only success events carry a session. A success payload that cannot be read still
	/// yields the event, without a session; other payloads are never read.
	pub fn from_parts(kind: ConnectEventKind, session: Result<Option<Session>, Error>) -> Self {
		let session = match (kind.class(), session) {
			(EventClass::Success, Ok(session)) => session,
			(EventClass::Success, Err(err)) => {
				log::error!(target: "nylas", "Unreadable session in {kind}: {err}");
				None
			}
			_ => None,
		};
		Self { kind, session }
	}

	pub(crate) fn from_js(kind: &JsValue, payload: JsValue) -> Result<Self, Error> {
		let Some(kind) = kind.as_string() else {
			return Err(Error::UnexpectedValue("an event name"));
		};
		let kind = ConnectEventKind::from(kind.as_str());
		let session = match kind.class() {
			EventClass::Success => serde_wasm_bindgen::from_value::<Option<Session>>(payload).map_err(Error::from),
			_ => Ok(None),
		};
		Ok(Self::from_parts(kind, session))
	}
}
