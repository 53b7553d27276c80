use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;

/// Claims read out of the middle segment of a compact token WITHOUT verifying its
/// signature. Display and request correlation only; never an authentication decision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnverifiedClaims {
	#[serde(rename = "sub")]
	pub subject: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
	#[error("the access token is not a compact token")]
	NotCompact,
	#[error("the access token claims are not base64url")]
	Base64,
	#[error("the access token claims are not readable: {0}")]
	Json(String),
}

impl UnverifiedClaims {
	pub fn decode(token: &str) -> Result<Self, ClaimsError> {
		let mut segments = token.split('.');
		let (Some(_header), Some(claims), Some(_signature), None) =
			(segments.next(), segments.next(), segments.next(), segments.next())
		else {
			return Err(ClaimsError::NotCompact);
		};
		let bytes = Base64UrlUnpadded::decode_vec(claims.trim_end_matches('=')).map_err(|_| ClaimsError::Base64)?;
		serde_json::from_slice(&bytes).map_err(|err| ClaimsError::Json(err.to_string()))
	}
}
