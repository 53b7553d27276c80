/// Every way a step of the connection flow can fail. None are fatal; each becomes a
/// message in the error slot of the view that triggered it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
	#[error("{}", .0.as_deref().unwrap_or("Failed to load session"))]
	SessionLookup(Option<String>),
	#[error("{}", .0.as_deref().unwrap_or("Connection failed"))]
	ConnectInitiation(Option<String>),
	#[error("{}", .0.as_deref().unwrap_or("Callback failed"))]
	CallbackCompletion(Option<String>),
	#[error("{}", .0.as_deref().unwrap_or("Disconnect failed"))]
	Disconnect(Option<String>),
	#[error("{}", .0.as_deref().unwrap_or("Nylas API call failed"))]
	ApiProbe(Option<String>),
}
