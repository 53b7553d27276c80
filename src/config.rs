//! Build-time configuration. Every value can be overridden through the environment of
//! the build; the fallbacks are placeholders for local development.

use crate::page::Route;
use nylas_connect::TokenSource;
use yew_router::Routable;

pub static CONFIG: Config = Config::from_env();

pub struct Config {
	pub nylas: NylasConfig,
	pub auth0: Auth0Config,
}

pub struct NylasConfig {
	pub client_id: &'static str,
	/// Defaults to the callback route on the current origin.
	pub redirect_uri: Option<&'static str>,
	pub api_url: &'static str,
}

pub struct Auth0Config {
	pub domain: &'static str,
	pub client_id: &'static str,
	pub audience: Option<&'static str>,
}

impl Config {
	pub const fn from_env() -> Self {
		Self {
			nylas: NylasConfig {
				client_id: match option_env!("NYLAS_CLIENT_ID") {
					Some(value) => value,
					None => "your-nylas-client-id",
				},
				redirect_uri: option_env!("NYLAS_REDIRECT_URI"),
				api_url: match option_env!("NYLAS_API_URL") {
					Some(value) => value,
					None => "https://api.us.nylas.com",
				},
			},
			auth0: Auth0Config {
				domain: match option_env!("AUTH0_DOMAIN") {
					Some(value) => value,
					None => "your-tenant.us.auth0.com",
				},
				client_id: match option_env!("AUTH0_CLIENT_ID") {
					Some(value) => value,
					None => "your-auth0-client-id",
				},
				audience: option_env!("AUTH0_AUDIENCE"),
			},
		}
	}
}

impl NylasConfig {
	pub fn redirect_uri(&self, origin: &str) -> String {
		match self.redirect_uri {
			Some(uri) => uri.to_owned(),
			None => format!("{}{}", origin.trim_end_matches('/'), Route::IntegrationCallback.to_path()),
		}
	}

	pub fn connection_config(&self, origin: &str, identity_token: TokenSource) -> nylas_connect::Config {
		nylas_connect::Config {
			client_id: self.client_id.to_owned(),
			redirect_uri: self.redirect_uri(origin),
			api_url: self.api_url.to_owned(),
			identity_token,
		}
	}
}

impl Auth0Config {
	/// Auth0 returns to the site root, which is also where the login redirect is completed.
	pub fn identity_config(&self, origin: &str) -> identity::Config {
		identity::Config {
			domain: self.domain.to_owned(),
			client_id: self.client_id.to_owned(),
			redirect_uri: format!("{}/", origin.trim_end_matches('/')),
			audience: self.audience.map(str::to_owned),
		}
	}
}

/// The origin the application is served from.
pub fn origin() -> String {
	match gloo_utils::window().location().origin() {
		Ok(origin) => origin,
		Err(err) => {
			log::error!("Failed to read the window origin: {err:?}");
			String::default()
		}
	}
}
