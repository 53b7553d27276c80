use crate::{ConnectEvent, ConnectMethod, Error, Session};
use futures_util::future::LocalBoxFuture;
use yew::Callback;

/// The operations the application needs from a connection client.
///
/// Every future is `'static` so callers can move it into `spawn_local`.
pub trait ConnectionClient {
	/// The session cached by the client, if any.
	fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, Error>>;

	/// Starts linking an account; resolves to the url the browser must navigate to.
	fn connect(&self, method: ConnectMethod) -> LocalBoxFuture<'static, Result<String, Error>>;

	/// Completes the handshake from the query/fragment of the current page url.
	fn callback(&self) -> LocalBoxFuture<'static, Result<(), Error>>;

	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>>;

	/// Delivers every state change to `handler` until the returned subscription is dropped.
	fn on_connect_state_change(&self, handler: Callback<ConnectEvent>) -> Subscription;
}

/// Unsubscribes when dropped.
pub struct Subscription(Option<Box<dyn FnOnce()>>);

impl Subscription {
	pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
		Self(Some(Box::new(unsubscribe)))
	}

	pub fn unsubscribe(mut self) {
		self.release();
	}

	fn release(&mut self) {
		if let Some(unsubscribe) = self.0.take() {
			unsubscribe();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.release();
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Subscription").field(&self.0.is_some()).finish()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::{cell::Cell, rc::Rc};

	#[test]
	fn drop_unsubscribes_once() {
		let calls = Rc::new(Cell::new(0));
		let subscription = Subscription::new({
			let calls = calls.clone();
			move || calls.set(calls.get() + 1)
		});
		assert_eq!(calls.get(), 0);
		drop(subscription);
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn explicit_unsubscribe() {
		let calls = Rc::new(Cell::new(0));
		let subscription = Subscription::new({
			let calls = calls.clone();
			move || calls.set(calls.get() + 1)
		});
		subscription.unsubscribe();
		assert_eq!(calls.get(), 1);
	}
}
