use std::{
	rc::Rc,
	sync::atomic::{AtomicBool, Ordering},
};
use tokio::sync::Notify;

/// One-way flag raised when the owner of some pending work goes away.
/// Based on the same awaitable-bool idea as [future_bool](https://github.com/devalain/future-bool).
#[derive(Clone, Default)]
pub struct CancelFlag {
	inner: Rc<AtomicBool>,
	notify: Rc<Notify>,
}

impl CancelFlag {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.inner.store(true, Ordering::Release);
		self.notify.notify_waiters();
	}

	pub fn is_cancelled(&self) -> bool {
		self.inner.load(Ordering::Acquire)
	}

	/// Returns immediately if already cancelled, otherwise waits until it is.
	pub async fn cancelled(&self) {
		// Registered before the check so a cancel in between is not missed.
		let notified = self.notify.notified();
		if self.is_cancelled() {
			return;
		}
		notified.await;
	}
}

impl PartialEq for CancelFlag {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl std::fmt::Debug for CancelFlag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("CancelFlag").field(&self.is_cancelled()).finish()
	}
}
