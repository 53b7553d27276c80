use serde::{Deserialize, Serialize};

/// A successfully linked external account.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Bearer credential for the Nylas API.
	pub access_token: String,
	/// Names the linked account at the provider.
	pub grant_id: String,
	#[serde(default)]
	pub id_token: Option<String>,
	/// Milliseconds since the unix epoch.
	#[serde(default)]
	pub expires_at: Option<f64>,
	#[serde(default)]
	pub scope: Option<String>,
	#[serde(default)]
	pub grant_info: Option<GrantInfo>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantInfo {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub provider: Option<String>,
	#[serde(default)]
	pub picture: Option<String>,
	#[serde(default)]
	pub email_verified: Option<bool>,
}

impl Session {
	pub fn email(&self) -> Option<&str> {
		self.grant_info.as_ref()?.email.as_deref()
	}

	/// The linked email, or "Unknown" when the grant carries none.
	pub fn display_email(&self) -> &str {
		self.email().unwrap_or("Unknown")
	}
}

// Tokens never reach logs.
impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("access_token", &"<redacted>")
			.field("grant_id", &self.grant_id)
			.field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
			.field("expires_at", &self.expires_at)
			.field("scope", &self.scope)
			.field("grant_info", &self.grant_info)
			.finish()
	}
}
