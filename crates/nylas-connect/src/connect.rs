use crate::{Config, ConnectEvent, ConnectMethod, ConnectOptions, ConnectionClient, Error, Session, Subscription};
use futures_util::future::LocalBoxFuture;
use js_sys::{Function, Object, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

#[wasm_bindgen(module = "@nylas/connect")]
extern "C" {
	#[wasm_bindgen(js_name = NylasConnect)]
	type NylasConnectSdk;

	#[wasm_bindgen(constructor, catch, js_class = "NylasConnect")]
	fn new(config: &JsValue) -> Result<NylasConnectSdk, JsValue>;

	#[wasm_bindgen(method, catch, js_class = "NylasConnect", js_name = getSession)]
	fn get_session(this: &NylasConnectSdk) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_class = "NylasConnect")]
	fn connect(this: &NylasConnectSdk, options: &JsValue) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_class = "NylasConnect")]
	fn callback(this: &NylasConnectSdk) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, catch, js_class = "NylasConnect")]
	fn logout(this: &NylasConnectSdk) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method, js_class = "NylasConnect", js_name = onConnectStateChange)]
	fn on_connect_state_change(this: &NylasConnectSdk, callback: &Function) -> JsValue;
}

/// [`ConnectionClient`] backed by the `@nylas/connect` SDK.
pub struct NylasConnect {
	sdk: Rc<NylasConnectSdk>,
	// The SDK calls back into this for every authenticated request.
	_identity_token: Closure<dyn FnMut() -> Promise>,
}

impl NylasConnect {
	pub fn new(config: Config) -> Result<Self, Error> {
		let Config {
			client_id,
			redirect_uri,
			api_url,
			identity_token,
		} = config;

		let identity_token = Closure::<dyn FnMut() -> Promise>::new(move || {
			let pending = (identity_token)();
			wasm_bindgen_futures::future_to_promise(async move {
				Ok(match pending.await {
					Some(token) => JsValue::from(token),
					None => JsValue::NULL,
				})
			})
		});

		let options = Object::new();
		Reflect::set(&options, &"clientId".into(), &client_id.into())?;
		Reflect::set(&options, &"redirectUri".into(), &redirect_uri.as_str().into())?;
		Reflect::set(&options, &"apiUrl".into(), &api_url.into())?;
		Reflect::set(&options, &"identityProviderToken".into(), identity_token.as_ref())?;

		let sdk = NylasConnectSdk::new(&options)?;
		log::debug!(target: "nylas", "Created connection client redirecting to {redirect_uri:?}");
		Ok(Self {
			sdk: Rc::new(sdk),
			_identity_token: identity_token,
		})
	}
}

impl ConnectionClient for NylasConnect {
	fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, Error>> {
		let sdk = self.sdk.clone();
		Box::pin(async move {
			let value = JsFuture::from(sdk.get_session()?).await?;
			Ok(serde_wasm_bindgen::from_value::<Option<Session>>(value)?)
		})
	}

	fn connect(&self, method: ConnectMethod) -> LocalBoxFuture<'static, Result<String, Error>> {
		let sdk = self.sdk.clone();
		Box::pin(async move {
			let options = serde_wasm_bindgen::to_value(&ConnectOptions { method })?;
			let value = JsFuture::from(sdk.connect(&options)?).await?;
			if let Some(url) = value.as_string() {
				return Ok(url);
			}
			// Some SDK versions wrap the url in a result object.
			Reflect::get(&value, &"url".into())
				.ok()
				.and_then(|url| url.as_string())
				.ok_or(Error::UnexpectedValue("an authorization url"))
		})
	}

	fn callback(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		let sdk = self.sdk.clone();
		Box::pin(async move {
			let result = JsFuture::from(sdk.callback()?).await?;
			log::debug!(target: "nylas", "Callback completed: {result:?}");
			Ok(())
		})
	}

	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		let sdk = self.sdk.clone();
		Box::pin(async move {
			JsFuture::from(sdk.logout()?).await?;
			Ok(())
		})
	}

	fn on_connect_state_change(&self, handler: Callback<ConnectEvent>) -> Subscription {
		let listener = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |kind: JsValue, session: JsValue| {
			match ConnectEvent::from_js(&kind, session) {
				Ok(event) => handler.emit(event),
				Err(err) => {
					log::error!(target: "nylas", "Dropping state change without an event name: {err}");
				}
			}
		});
		let unsubscribe = self.sdk.on_connect_state_change(listener.as_ref().unchecked_ref());
		Subscription::new(move || {
			if let Some(unsubscribe) = unsubscribe.dyn_ref::<Function>() {
				if let Err(err) = unsubscribe.call0(&JsValue::UNDEFINED) {
					log::error!(target: "nylas", "Failed to unsubscribe from state changes: {}", Error::from(err));
				}
			}
			drop(listener);
		})
	}
}
