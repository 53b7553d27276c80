use super::{Failure, ProbeKind, ProbeOutput};
use enum_map::EnumMap;
use nylas_connect::{ConnectEvent, EventClass, Session};
use std::rc::Rc;
use yew::Reducible;

/// Where the linked account stands. The session only exists inside `Connected`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ConnectionStatus {
	#[default]
	Idle,
	Loading,
	NotConnected,
	Connecting,
	Connected(Session),
}

impl ConnectionStatus {
	fn from_session(session: Option<Session>) -> Self {
		match session {
			Some(session) => Self::Connected(session),
			None => Self::NotConnected,
		}
	}
}

/// The controller states, as derived from the view model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	LoadingSession,
	NotConnected,
	Connecting,
	Connected,
	Disconnecting,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProbeState {
	pub loading: bool,
	pub output: Option<ProbeOutput>,
	pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	LoadStarted,
	SessionLoaded(Option<Session>),
	LoadFailed(Failure),
	ConnectStarted,
	ConnectFailed(Failure),
	/// A notification from the connection client's state-change stream.
	StateChanged(ConnectEvent),
	DisconnectStarted,
	Disconnected,
	DisconnectFailed(Failure),
	ProbeStarted(ProbeKind),
	ProbeFinished(ProbeKind, ProbeOutput),
	ProbeFailed(ProbeKind, Failure),
}

/// View model of the Integration page.
///
/// Direct call results and state-change notifications both write the status; whichever
/// is applied last wins, since both describe the same underlying session.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ConnectionState {
	status: ConnectionStatus,
	disconnecting: bool,
	error: Option<String>,
	probes: EnumMap<ProbeKind, ProbeState>,
}

impl ConnectionState {
	pub fn status(&self) -> &ConnectionStatus {
		&self.status
	}

	pub fn session(&self) -> Option<&Session> {
		match &self.status {
			ConnectionStatus::Connected(session) => Some(session),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn probe(&self, kind: ProbeKind) -> &ProbeState {
		&self.probes[kind]
	}

	pub fn is_loading(&self) -> bool {
		matches!(self.status, ConnectionStatus::Idle | ConnectionStatus::Loading)
	}

	pub fn is_connecting(&self) -> bool {
		matches!(self.status, ConnectionStatus::Connecting)
	}

	pub fn is_disconnecting(&self) -> bool {
		self.disconnecting
	}

	/// No session and no connection attempt under way.
	pub fn can_connect(&self) -> bool {
		matches!(self.status, ConnectionStatus::NotConnected)
	}

	pub fn can_disconnect(&self) -> bool {
		self.session().is_some() && !self.disconnecting
	}

	pub fn phase(&self) -> Phase {
		match &self.status {
			ConnectionStatus::Idle => Phase::Idle,
			ConnectionStatus::Loading => Phase::LoadingSession,
			ConnectionStatus::NotConnected => Phase::NotConnected,
			ConnectionStatus::Connecting => Phase::Connecting,
			ConnectionStatus::Connected(_) if self.disconnecting => Phase::Disconnecting,
			ConnectionStatus::Connected(_) => Phase::Connected,
		}
	}

	pub fn apply(&mut self, action: Action) {
		match action {
			Action::LoadStarted => {
				self.status = ConnectionStatus::Loading;
				self.error = None;
			}
			Action::SessionLoaded(session) => {
				self.status = ConnectionStatus::from_session(session);
			}
			Action::LoadFailed(failure) => {
				self.status = ConnectionStatus::NotConnected;
				self.error = Some(failure.to_string());
			}
			Action::ConnectStarted => {
				self.status = ConnectionStatus::Connecting;
				self.error = None;
			}
			Action::ConnectFailed(failure) => {
				self.status = ConnectionStatus::NotConnected;
				self.error = Some(failure.to_string());
			}
			Action::StateChanged(event) => match event.class() {
				EventClass::Success => {
					self.status = ConnectionStatus::from_session(event.session);
				}
				EventClass::Termination => {
					self.status = ConnectionStatus::NotConnected;
				}
				EventClass::Ignored => {}
			},
			Action::DisconnectStarted => {
				self.disconnecting = true;
				self.error = None;
			}
			Action::Disconnected => {
				self.status = ConnectionStatus::NotConnected;
				self.disconnecting = false;
				self.probes = EnumMap::default();
			}
			Action::DisconnectFailed(failure) => {
				self.disconnecting = false;
				self.error = Some(failure.to_string());
			}
			Action::ProbeStarted(kind) => {
				self.probes[kind] = ProbeState {
					loading: true,
					output: None,
					error: None,
				};
			}
			Action::ProbeFinished(kind, output) => {
				let probe = &mut self.probes[kind];
				probe.loading = false;
				probe.output = Some(output);
			}
			Action::ProbeFailed(kind, failure) => {
				let message = failure.to_string();
				self.probes[kind] = ProbeState {
					loading: false,
					output: Some(ProbeOutput::Failed { error: message.clone() }),
					error: Some(message),
				};
			}
		}
	}
}

impl Reducible for ConnectionState {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut state = (*self).clone();
		state.apply(action);
		Rc::new(state)
	}
}
