use crate::{redirect, Config, Error, UserProfile};
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "@auth0/auth0-spa-js")]
extern "C" {
	type Auth0Client;

	#[wasm_bindgen(constructor, catch)]
	fn new(options: &JsValue) -> Result<Auth0Client, JsValue>;

	#[wasm_bindgen(method, catch, js_name = checkSession)]
	fn check_session(this: &Auth0Client) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_name = handleRedirectCallback)]
	fn handle_redirect_callback(this: &Auth0Client, url: &str) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_name = isAuthenticated)]
	fn is_authenticated(this: &Auth0Client) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_name = getUser)]
	fn get_user(this: &Auth0Client) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_name = getTokenSilently)]
	fn get_token_silently(this: &Auth0Client) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_name = loginWithRedirect)]
	fn login_with_redirect(this: &Auth0Client, options: &JsValue) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch)]
	fn logout(this: &Auth0Client, options: &JsValue) -> Result<Promise, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientOptions<'a> {
	domain: &'a str,
	client_id: &'a str,
	// The session lives as long as the tab does.
	cache_location: &'static str,
	authorization_params: AuthorizationParams<'a>,
}

// Auth0 spells these in snake case.
#[derive(Serialize, Default)]
struct AuthorizationParams<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	redirect_uri: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	audience: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	screen_hint: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginOptions<'a> {
	authorization_params: AuthorizationParams<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutOptions<'a> {
	logout_params: LogoutParams<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutParams<'a> {
	return_to: &'a str,
}

pub(crate) struct Client {
	sdk: Auth0Client,
	config: Config,
}

// One client per provider; identity is the only meaningful equality.
impl PartialEq for Client {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl Client {
	pub fn new(config: Config) -> Result<Self, Error> {
		let options = serde_wasm_bindgen::to_value(&ClientOptions {
			domain: &config.domain,
			client_id: &config.client_id,
			cache_location: "memory",
			authorization_params: AuthorizationParams {
				redirect_uri: Some(&config.redirect_uri),
				audience: config.audience.as_deref(),
				screen_hint: None,
			},
		})?;
		let sdk = Auth0Client::new(&options)?;
		Ok(Self { sdk, config })
	}

	/// Completes a pending login redirect or restores an existing session, then reports
	/// who is signed in.
	pub async fn initialize(&self) -> Result<Option<UserProfile>, Error> {
		let location = gloo_utils::window().location();
		let href = location.href()?;
		if redirect::is_redirect_callback(&self.config.redirect_uri, &href) {
			log::debug!(target: "identity", "Completing login redirect");
			JsFuture::from(self.sdk.handle_redirect_callback(&href)?).await?;
			if let Some(clean) = redirect::without_callback_params(&href) {
				let history = gloo_utils::history();
				history.replace_state_with_url(&JsValue::NULL, "", Some(clean.as_str()))?;
			}
		} else {
			JsFuture::from(self.sdk.check_session()?).await?;
		}

		let authenticated = JsFuture::from(self.sdk.is_authenticated()?).await?;
		if !authenticated.as_bool().unwrap_or(false) {
			return Ok(None);
		}
		let user = JsFuture::from(self.sdk.get_user()?).await?;
		Ok(serde_wasm_bindgen::from_value::<Option<serde_json::Value>>(user)?.map(UserProfile::from))
	}

	pub async fn login(&self, screen_hint: Option<&str>) -> Result<(), Error> {
		let options = serde_wasm_bindgen::to_value(&LoginOptions {
			authorization_params: AuthorizationParams {
				screen_hint,
				..Default::default()
			},
		})?;
		JsFuture::from(self.sdk.login_with_redirect(&options)?).await?;
		Ok(())
	}

	pub async fn logout(&self, return_to: &str) -> Result<(), Error> {
		let options = serde_wasm_bindgen::to_value(&LogoutOptions {
			logout_params: LogoutParams { return_to },
		})?;
		JsFuture::from(self.sdk.logout(&options)?).await?;
		Ok(())
	}

	pub async fn access_token(&self) -> Result<String, Error> {
		let token = JsFuture::from(self.sdk.get_token_silently()?).await?;
		token.as_string().ok_or(Error::Sdk(Some("Auth0 returned a non-string access token".into())))
	}
}
