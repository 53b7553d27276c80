use super::{Failure, Navigate};
use crate::{page::Route, task::CancelFlag};
use futures::future::{select, Either};
use nylas_connect::ConnectionClient;
use yew::Callback;

/// What the callback view shows.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CallbackOutcome {
	#[default]
	Pending,
	Succeeded,
	Failed(String),
}

/// Completes the authorization handshake the provider redirected back with, then swaps
/// the callback location for the Integration route. Nothing is reported once `cancel` is raised.
pub async fn complete_callback(
	client: &dyn ConnectionClient,
	navigator: &dyn Navigate,
	cancel: &CancelFlag,
	outcome: &Callback<CallbackOutcome>,
) {
	let completion = client.callback();
	let cancelled = Box::pin(cancel.cancelled());
	let result = match select(completion, cancelled).await {
		Either::Left((result, _)) => result,
		Either::Right(_) => {
			log::debug!(target: "callback", "Left the callback view before the handshake finished");
			return;
		}
	};
	if cancel.is_cancelled() {
		return;
	}
	match result {
		Ok(()) => {
			log::info!(target: "callback", "Connection established");
			outcome.emit(CallbackOutcome::Succeeded);
			navigator.replace(Route::Integration);
		}
		Err(err) => {
			log::error!(target: "callback", "Failed to complete the connection: {err}");
			let failure = Failure::CallbackCompletion(err.message());
			outcome.emit(CallbackOutcome::Failed(failure.to_string()));
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::connection::testing::{FakeClient, RecordingNavigator};
	use futures::{
		executor::{block_on, LocalPool},
		task::LocalSpawnExt,
	};
	use nylas_connect::Error;
	use std::{cell::RefCell, rc::Rc};

	fn recording() -> (Rc<RefCell<Vec<CallbackOutcome>>>, Callback<CallbackOutcome>) {
		let outcomes = Rc::new(RefCell::new(Vec::new()));
		let callback = Callback::from({
			let outcomes = outcomes.clone();
			move |outcome: CallbackOutcome| outcomes.borrow_mut().push(outcome)
		});
		(outcomes, callback)
	}

	#[test]
	fn success_replaces_the_location() {
		let client = FakeClient::default();
		let navigator = RecordingNavigator::default();
		let (outcomes, outcome) = recording();
		client.callback.reply(Ok(()));
		block_on(complete_callback(&client, &navigator, &CancelFlag::new(), &outcome));
		assert_eq!(*outcomes.borrow(), vec![CallbackOutcome::Succeeded]);
		assert_eq!(*navigator.replaced.borrow(), vec![Route::Integration]);
		assert!(navigator.assigned.borrow().is_empty());
	}

	#[test]
	fn failure_stays_on_the_view() {
		let client = FakeClient::default();
		let navigator = RecordingNavigator::default();
		let (outcomes, outcome) = recording();
		client.callback.reply(Err(Error::Sdk(Some("invalid_grant".into()))));
		block_on(complete_callback(&client, &navigator, &CancelFlag::new(), &outcome));
		assert_eq!(*outcomes.borrow(), vec![CallbackOutcome::Failed("invalid_grant".into())]);
		assert!(navigator.replaced.borrow().is_empty());
	}

	#[test]
	fn failure_without_message() {
		let client = FakeClient::default();
		let navigator = RecordingNavigator::default();
		let (outcomes, outcome) = recording();
		client.callback.reply(Err(Error::Sdk(None)));
		block_on(complete_callback(&client, &navigator, &CancelFlag::new(), &outcome));
		assert_eq!(*outcomes.borrow(), vec![CallbackOutcome::Failed("Callback failed".into())]);
	}

	#[test]
	fn unmount_silences_the_result() {
		let client = Rc::new(FakeClient::default());
		let navigator = Rc::new(RecordingNavigator::default());
		let cancel = CancelFlag::new();
		let (outcomes, outcome) = recording();
		let reply = client.callback.defer();

		let mut pool = LocalPool::new();
		pool.spawner()
			.spawn_local({
				let client = client.clone();
				let navigator = navigator.clone();
				let cancel = cancel.clone();
				async move { complete_callback(&*client, &*navigator, &cancel, &outcome).await }
			})
			.unwrap();
		pool.run_until_stalled();
		cancel.cancel();
		let _ = reply.send(Ok(()));
		pool.run_until_stalled();

		assert!(outcomes.borrow().is_empty());
		assert!(navigator.replaced.borrow().is_empty());
	}
}
