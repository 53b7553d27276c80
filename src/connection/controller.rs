use super::{
	Action, Failure, Navigate, ProbeError, ProbeKind, ProbeRequest, ProbeTransport, UnverifiedClaims,
	EXTERNAL_USER_HEADER,
};
use crate::task::CancelFlag;
use enumset::{EnumSet, EnumSetType};
use futures::future::LocalBoxFuture;
use nylas_connect::{ConnectEvent, ConnectMethod, ConnectionClient, Session, Subscription};
use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};
use yew::Callback;

/// Fetches the identity provider's access token for the signed-in user.
pub type IdentityToken = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<String, identity::Error>>>;

/// The user-triggered operations, at most one of each in flight.
#[derive(Debug, EnumSetType)]
pub enum Operation {
	LoadSession,
	Connect,
	Disconnect,
	ProbeSessionToken,
	ProbeIdentityCorrelated,
}

impl From<ProbeKind> for Operation {
	fn from(value: ProbeKind) -> Self {
		match value {
			ProbeKind::SessionToken => Self::ProbeSessionToken,
			ProbeKind::IdentityCorrelated => Self::ProbeIdentityCorrelated,
		}
	}
}

pub struct Parts {
	pub client: Rc<dyn ConnectionClient>,
	pub navigator: Rc<dyn Navigate>,
	pub transport: Rc<dyn ProbeTransport>,
	pub identity_token: IdentityToken,
	pub api_url: String,
}

/// Drives the connection client on behalf of one mounted view.
/// Results are dispatched to `sink` until [`Controller::teardown`].
#[derive(Clone)]
pub struct Controller(Rc<Inner>);

struct Inner {
	parts: Parts,
	sink: Callback<Action>,
	in_flight: RefCell<EnumSet<Operation>>,
	cancel: CancelFlag,
	subscription: RefCell<Option<Subscription>>,
}

impl PartialEq for Controller {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

struct InFlight {
	inner: Rc<Inner>,
	operation: Operation,
}

impl Drop for InFlight {
	fn drop(&mut self) {
		self.inner.in_flight.borrow_mut().remove(self.operation);
	}
}

impl Controller {
	pub fn new(parts: Parts, sink: Callback<Action>) -> Self {
		Self(Rc::new(Inner {
			parts,
			sink,
			in_flight: RefCell::new(EnumSet::empty()),
			cancel: CancelFlag::new(),
			subscription: RefCell::new(None),
		}))
	}

	pub fn is_in_flight(&self, operation: Operation) -> bool {
		self.0.in_flight.borrow().contains(operation)
	}

	fn begin(&self, operation: Operation) -> Option<InFlight> {
		if !self.0.in_flight.borrow_mut().insert(operation) {
			log::debug!(target: "integration", "{operation:?} is already in flight");
			return None;
		}
		Some(InFlight {
			inner: self.0.clone(),
			operation,
		})
	}

	fn dispatch(&self, action: Action) {
		if self.0.cancel.is_cancelled() {
			log::debug!(target: "integration", "Discarding {action:?} after teardown");
			return;
		}
		self.0.sink.emit(action);
	}

	/// Forwards the client's state-change notifications into the view model.
	/// Subscribing again replaces the previous subscription.
	pub fn subscribe(&self) {
		let weak: Weak<Inner> = Rc::downgrade(&self.0);
		let handler = Callback::from(move |event: ConnectEvent| {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			log::debug!(target: "integration", "Connection state changed: {}", event.kind);
			Controller(inner).dispatch(Action::StateChanged(event));
		});
		let subscription = self.0.parts.client.on_connect_state_change(handler);
		let previous = self.0.subscription.borrow_mut().replace(subscription);
		drop(previous);
	}

	/// Stops all further mutation of the view model and releases the subscription.
	pub fn teardown(&self) {
		self.0.cancel.cancel();
		let subscription = self.0.subscription.borrow_mut().take();
		if let Some(subscription) = subscription {
			subscription.unsubscribe();
		}
	}

	pub async fn load_session(&self) {
		let Some(_in_flight) = self.begin(Operation::LoadSession) else {
			return;
		};
		self.dispatch(Action::LoadStarted);
		match self.0.parts.client.get_session().await {
			Ok(session) => {
				log::debug!(target: "integration", "Session present: {}", session.is_some());
				self.dispatch(Action::SessionLoaded(session));
			}
			Err(err) => {
				log::error!(target: "integration", "Failed to load the session: {err}");
				self.dispatch(Action::LoadFailed(Failure::SessionLookup(err.message())));
			}
		}
	}

	/// Asks the client for the authorization URL and leaves the application for it.
	pub async fn connect(&self) {
		let Some(_in_flight) = self.begin(Operation::Connect) else {
			return;
		};
		self.dispatch(Action::ConnectStarted);
		match self.0.parts.client.connect(ConnectMethod::Inline).await {
			Ok(url) => {
				if self.0.cancel.is_cancelled() {
					return;
				}
				log::info!(target: "integration", "Redirecting to the Nylas authorization page");
				if let Err(err) = self.0.parts.navigator.assign(&url) {
					log::error!(target: "integration", "Failed to leave for the authorization page: {err}");
					self.dispatch(Action::ConnectFailed(Failure::ConnectInitiation(Some(err.to_string()))));
				}
			}
			Err(err) => {
				log::error!(target: "integration", "Failed to start the connection: {err}");
				self.dispatch(Action::ConnectFailed(Failure::ConnectInitiation(err.message())));
			}
		}
	}

	pub async fn disconnect(&self) {
		let Some(_in_flight) = self.begin(Operation::Disconnect) else {
			return;
		};
		self.dispatch(Action::DisconnectStarted);
		match self.0.parts.client.logout().await {
			Ok(()) => {
				log::info!(target: "integration", "Disconnected the linked account");
				self.dispatch(Action::Disconnected);
			}
			Err(err) => {
				log::error!(target: "integration", "Failed to disconnect: {err}");
				self.dispatch(Action::DisconnectFailed(Failure::Disconnect(err.message())));
			}
		}
	}

	/// Calls the grant inspection endpoint with `session`'s credential.
	/// The outcome only ever lands in the probe's own slot.
	pub async fn probe(&self, kind: ProbeKind, session: Session) {
		let Some(_in_flight) = self.begin(kind.into()) else {
			return;
		};
		self.dispatch(Action::ProbeStarted(kind));
		match self.send_probe(kind, &session).await {
			Ok(output) => {
				log::debug!(target: "probe", "{kind:?} finished");
				self.dispatch(Action::ProbeFinished(kind, output));
			}
			Err(err) => {
				log::error!(target: "probe", "{kind:?} failed: {err}");
				self.dispatch(Action::ProbeFailed(kind, Failure::ApiProbe(Some(err.to_string()))));
			}
		}
	}

	async fn send_probe(&self, kind: ProbeKind, session: &Session) -> Result<super::ProbeOutput, ProbeError> {
		let mut request = ProbeRequest::grant_inspection(&self.0.parts.api_url, session);
		if kind == ProbeKind::IdentityCorrelated {
			let token = (self.0.parts.identity_token)().await?;
			let claims = UnverifiedClaims::decode(&token)?;
			request = request.with_header(EXTERNAL_USER_HEADER, claims.subject);
		}
		log::debug!(target: "probe", "Sending {request:?}");
		self.0.parts.transport.send(request).await
	}
}
