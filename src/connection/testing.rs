//! Test doubles for the connection flow.

use super::{Action, ConnectionState, Navigate, NavigationError, ProbeError, ProbeOutput, ProbeRequest, ProbeTransport};
use crate::page::Route;
use futures::{channel::oneshot, future::LocalBoxFuture};
use nylas_connect::{ConnectEvent, ConnectMethod, ConnectionClient, Error, GrantInfo, Session, Subscription};
use std::{
	cell::{Cell, RefCell},
	collections::VecDeque,
	rc::Rc,
};
use yew::Callback;

pub fn session(email: &str) -> Session {
	Session {
		access_token: format!("token-{email}"),
		grant_id: format!("grant-{email}"),
		id_token: None,
		expires_at: None,
		scope: None,
		grant_info: Some(GrantInfo {
			email: Some(email.to_owned()),
			..Default::default()
		}),
	}
}

/// Replies for one operation, handed out in call order.
/// A reply can be given up front or deferred and resolved later through its sender.
pub struct Script<R> {
	replies: RefCell<VecDeque<oneshot::Receiver<R>>>,
	calls: Cell<usize>,
}

impl<R> Default for Script<R> {
	fn default() -> Self {
		Self {
			replies: RefCell::new(VecDeque::new()),
			calls: Cell::new(0),
		}
	}
}

impl<R: 'static> Script<R> {
	pub fn reply(&self, reply: R) {
		let (send, recv) = oneshot::channel();
		let _ = send.send(reply);
		self.replies.borrow_mut().push_back(recv);
	}

	pub fn defer(&self) -> oneshot::Sender<R> {
		let (send, recv) = oneshot::channel();
		self.replies.borrow_mut().push_back(recv);
		send
	}

	pub fn calls(&self) -> usize {
		self.calls.get()
	}

	fn next(&self) -> LocalBoxFuture<'static, Option<R>> {
		self.calls.set(self.calls.get() + 1);
		let recv = self.replies.borrow_mut().pop_front();
		Box::pin(async move {
			match recv {
				Some(recv) => recv.await.ok(),
				None => None,
			}
		})
	}
}

fn unscripted<T>(reply: Option<Result<T, Error>>) -> Result<T, Error> {
	reply.unwrap_or_else(|| Err(Error::Sdk(Some("unscripted call".into()))))
}

#[derive(Default)]
pub struct FakeClient {
	pub get_session: Script<Result<Option<Session>, Error>>,
	pub connect: Script<Result<String, Error>>,
	pub callback: Script<Result<(), Error>>,
	pub logout: Script<Result<(), Error>>,
	pub connect_method: Cell<Option<ConnectMethod>>,
	handler: Rc<RefCell<Option<Callback<ConnectEvent>>>>,
	pub unsubscribed: Rc<Cell<bool>>,
}

impl FakeClient {
	/// Delivers `event` as the SDK would, if anyone is subscribed.
	pub fn emit(&self, event: ConnectEvent) {
		let handler = self.handler.borrow().clone();
		if let Some(handler) = handler {
			handler.emit(event);
		}
	}
}

impl ConnectionClient for FakeClient {
	fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Session>, Error>> {
		let reply = self.get_session.next();
		Box::pin(async move { unscripted(reply.await) })
	}

	fn connect(&self, method: ConnectMethod) -> LocalBoxFuture<'static, Result<String, Error>> {
		self.connect_method.set(Some(method));
		let reply = self.connect.next();
		Box::pin(async move { unscripted(reply.await) })
	}

	fn callback(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		let reply = self.callback.next();
		Box::pin(async move { unscripted(reply.await) })
	}

	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		let reply = self.logout.next();
		Box::pin(async move { unscripted(reply.await) })
	}

	fn on_connect_state_change(&self, handler: Callback<ConnectEvent>) -> Subscription {
		*self.handler.borrow_mut() = Some(handler);
		let registered = self.handler.clone();
		let unsubscribed = self.unsubscribed.clone();
		Subscription::new(move || {
			registered.borrow_mut().take();
			unsubscribed.set(true);
		})
	}
}

#[derive(Default)]
pub struct RecordingNavigator {
	pub assigned: RefCell<Vec<String>>,
	pub replaced: RefCell<Vec<Route>>,
	/// When set, leaving the application fails with this message.
	pub blocked: RefCell<Option<String>>,
}

impl Navigate for RecordingNavigator {
	fn assign(&self, url: &str) -> Result<(), NavigationError> {
		if let Some(message) = self.blocked.borrow().clone() {
			return Err(NavigationError(message));
		}
		self.assigned.borrow_mut().push(url.to_owned());
		Ok(())
	}

	fn replace(&self, route: Route) {
		self.replaced.borrow_mut().push(route);
	}
}

#[derive(Default)]
pub struct FakeTransport {
	pub requests: RefCell<Vec<ProbeRequest>>,
	pub replies: Script<Result<ProbeOutput, ProbeError>>,
}

impl ProbeTransport for FakeTransport {
	fn send(&self, request: ProbeRequest) -> LocalBoxFuture<'static, Result<ProbeOutput, ProbeError>> {
		self.requests.borrow_mut().push(request);
		let reply = self.replies.next();
		Box::pin(async move { reply.await.unwrap_or_else(|| Ok(ProbeOutput::from_response(200, "OK", ""))) })
	}
}

/// Applies dispatched actions the way the page's reducer would.
#[derive(Clone, Default)]
pub struct Recorder {
	pub state: Rc<RefCell<ConnectionState>>,
	pub actions: Rc<RefCell<Vec<Action>>>,
}

impl Recorder {
	pub fn sink(&self) -> Callback<Action> {
		let recorder = self.clone();
		Callback::from(move |action: Action| {
			recorder.actions.borrow_mut().push(action.clone());
			recorder.state.borrow_mut().apply(action);
		})
	}

	pub fn state(&self) -> ConnectionState {
		self.state.borrow().clone()
	}
}
