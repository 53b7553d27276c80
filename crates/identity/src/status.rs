use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

/// The signed-in user's profile as Auth0 reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(serde_json::Value);

impl UserProfile {
	pub fn email(&self) -> Option<&str> {
		self.0.get("email")?.as_str()
	}

	pub fn to_pretty_json(&self) -> String {
		serde_json::to_string_pretty(&self.0).unwrap_or_default()
	}
}

impl From<serde_json::Value> for UserProfile {
	fn from(value: serde_json::Value) -> Self {
		Self(value)
	}
}

// Not persisted; the SDK restores the session itself on reload.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct Status {
	loading: bool,
	user: Option<UserProfile>,
	pub(crate) error: Option<String>,
}

impl Default for Status {
	fn default() -> Self {
		Self {
			loading: true,
			user: None,
			error: None,
		}
	}
}

impl Status {
	pub fn signed_in(user: UserProfile) -> Self {
		Self {
			loading: false,
			user: Some(user),
			error: None,
		}
	}

	pub fn anonymous() -> Self {
		Self {
			loading: false,
			user: None,
			error: None,
		}
	}

	pub fn failed(error: impl ToString) -> Self {
		Self {
			loading: false,
			user: None,
			error: Some(error.to_string()),
		}
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	pub fn user(&self) -> Option<&UserProfile> {
		self.user.as_ref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn starts_loading() {
		let status = Status::default();
		assert!(status.is_loading());
		assert!(!status.is_authenticated());
		assert_eq!(status.error(), None);
	}

	#[test]
	fn signed_in_exposes_profile() {
		let profile = UserProfile::from(serde_json::json!({
			"sub": "auth0|abc",
			"email": "someone@example.com",
		}));
		let status = Status::signed_in(profile);
		assert!(!status.is_loading());
		assert!(status.is_authenticated());
		let user = status.user().unwrap();
		assert_eq!(user.email(), Some("someone@example.com"));
		assert!(user.to_pretty_json().contains("\n  \"email\""));
	}

	#[test]
	fn failure_is_not_authenticated() {
		let status = Status::failed("Invalid state");
		assert!(!status.is_loading());
		assert!(!status.is_authenticated());
		assert_eq!(status.error(), Some("Invalid state"));
	}
}
