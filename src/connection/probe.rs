use super::ClaimsError;
use enum_map::Enum;
use futures::future::LocalBoxFuture;
use nylas_connect::Session;
use serde::Serialize;
use std::sync::Arc;

/// Correlates a Nylas request with the identity provider's user.
pub static EXTERNAL_USER_HEADER: &str = "X-Nylas-External-User-Id";

/// The two ways a linked session's credential can be demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ProbeKind {
	/// The session's own bearer token.
	SessionToken,
	/// The session's bearer token plus the identity provider's subject as a correlation header.
	IdentityCorrelated,
}

impl ProbeKind {
	pub fn label(&self) -> &'static str {
		match self {
			Self::SessionToken => "Test Nylas API using Nylas Session Access Token",
			Self::IdentityCorrelated => "Test Nylas API using Auth0 Access Token",
		}
	}
}

#[derive(Clone, PartialEq)]
pub struct ProbeRequest {
	pub url: String,
	pub headers: Vec<(&'static str, String)>,
}

impl ProbeRequest {
	/// `GET /v3/grants/{grant}` authorized by the session's own token.
	pub fn grant_inspection(api_url: &str, session: &Session) -> Self {
		Self {
			url: format!("{}/v3/grants/{}", api_url.trim_end_matches('/'), session.grant_id),
			headers: vec![("Authorization", format!("Bearer {}", session.access_token))],
		}
	}

	pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));
		self
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

// Header values hold credentials.
impl std::fmt::Debug for ProbeRequest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ProbeRequest")
			.field("url", &self.url)
			.field("headers", &self.headers.iter().map(|(name, _)| *name).collect::<Vec<_>>())
			.finish()
	}
}

/// What a probe displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProbeOutput {
	Response {
		status: u16,
		#[serde(rename = "statusText")]
		status_text: String,
		data: serde_json::Value,
	},
	Failed {
		error: String,
	},
}

impl ProbeOutput {
	/// `data` is the JSON body, `null` for an empty body, or `{"raw": body}` otherwise.
	pub fn from_response(status: u16, status_text: impl Into<String>, body: &str) -> Self {
		let data = match body.is_empty() {
			true => serde_json::Value::Null,
			false => serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "raw": body })),
		};
		Self::Response {
			status,
			status_text: status_text.into(),
			data,
		}
	}

	pub fn to_pretty_json(&self) -> String {
		serde_json::to_string_pretty(self).unwrap_or_default()
	}
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum ProbeError {
	#[error(transparent)]
	Request(Arc<reqwest::Error>),
	#[error(transparent)]
	IdentityToken(#[from] identity::Error),
	#[error(transparent)]
	Claims(#[from] ClaimsError),
}

impl From<reqwest::Error> for ProbeError {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(Arc::new(value))
	}
}

/// Sends a probe request; any HTTP status is a successful probe.
pub trait ProbeTransport {
	fn send(&self, request: ProbeRequest) -> LocalBoxFuture<'static, Result<ProbeOutput, ProbeError>>;
}

impl ProbeTransport for reqwest::Client {
	fn send(&self, request: ProbeRequest) -> LocalBoxFuture<'static, Result<ProbeOutput, ProbeError>> {
		let mut builder = self.get(&request.url);
		for (name, value) in request.headers {
			builder = builder.header(name, value);
		}
		Box::pin(async move {
			let response = builder.send().await?;
			let status = response.status();
			let body = response.text().await?;
			Ok(ProbeOutput::from_response(
				status.as_u16(),
				status.canonical_reason().unwrap_or_default(),
				&body,
			))
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::connection::testing::session;

	#[test]
	fn grant_inspection_request() {
		let request = ProbeRequest::grant_inspection("https://api.us.nylas.com/", &session("someone@example.com"));
		assert_eq!(request.url, "https://api.us.nylas.com/v3/grants/grant-someone@example.com");
		assert_eq!(request.header("authorization"), Some("Bearer token-someone@example.com"));
		assert_eq!(request.header(EXTERNAL_USER_HEADER), None);
	}

	#[test]
	fn correlation_header() {
		let request = ProbeRequest::grant_inspection("https://api.us.nylas.com", &session("someone@example.com"))
			.with_header(EXTERNAL_USER_HEADER, "auth0|6512");
		assert_eq!(request.header("x-nylas-external-user-id"), Some("auth0|6512"));
		assert!(!format!("{request:?}").contains("token-someone"));
	}

	#[test]
	fn json_body() {
		let output = ProbeOutput::from_response(200, "OK", r#"{"data":{"id":"grant-1"}}"#);
		assert_eq!(
			serde_json::to_value(&output).unwrap(),
			serde_json::json!({ "status": 200, "statusText": "OK", "data": { "data": { "id": "grant-1" } } })
		);
	}

	#[test]
	fn empty_and_raw_bodies() {
		let ProbeOutput::Response { data, .. } = ProbeOutput::from_response(204, "No Content", "") else {
			panic!("expected a response");
		};
		assert_eq!(data, serde_json::Value::Null);

		let ProbeOutput::Response { data, .. } = ProbeOutput::from_response(502, "Bad Gateway", "<html>") else {
			panic!("expected a response");
		};
		assert_eq!(data, serde_json::json!({ "raw": "<html>" }));
	}

	#[test]
	fn failure_output() {
		let output = ProbeOutput::Failed { error: "network down".into() };
		assert_eq!(serde_json::to_value(&output).unwrap(), serde_json::json!({ "error": "network down" }));
	}
}
