//! Stub entities shared by the unit tests in this crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use strand_core::{
	BasicCallbackGroup, CallbackGroup, Client, EntityId, Payload, PollResult, Service, Subscription, Timer, Waitable,
};

/// Downgrades a concrete group to the weak trait handle the engine consumes.
pub(crate) fn weak_group(group: &Arc<BasicCallbackGroup>) -> Weak<dyn CallbackGroup> {
	let group: Arc<dyn CallbackGroup> = group.clone();
	Arc::downgrade(&group)
}

pub(crate) struct StubTimer {
	id: EntityId,
	due: bool,
	claims: AtomicUsize,
}

impl StubTimer {
	pub fn new(id: EntityId) -> Arc<Self> {
		Self::with_due(id, true)
	}

	pub fn with_due(id: EntityId, due: bool) -> Arc<Self> {
		Arc::new(Self {
			id,
			due,
			claims: AtomicUsize::new(0),
		})
	}

	pub fn claims(&self) -> usize {
		self.claims.load(Ordering::Relaxed)
	}
}

impl Timer for StubTimer {
	fn id(&self) -> EntityId {
		self.id
	}

	fn claim(&self) -> bool {
		self.claims.fetch_add(1, Ordering::Relaxed);
		self.due
	}
}

pub(crate) struct StubSubscription {
	id: EntityId,
}

impl StubSubscription {
	pub fn new(id: EntityId) -> Arc<Self> {
		Arc::new(Self { id })
	}
}

impl Subscription for StubSubscription {
	fn id(&self) -> EntityId {
		self.id
	}
}

pub(crate) struct StubService {
	id: EntityId,
}

impl StubService {
	pub fn new(id: EntityId) -> Arc<Self> {
		Arc::new(Self { id })
	}
}

impl Service for StubService {
	fn id(&self) -> EntityId {
		self.id
	}
}

pub(crate) struct StubClient {
	id: EntityId,
}

impl StubClient {
	pub fn new(id: EntityId) -> Arc<Self> {
		Arc::new(Self { id })
	}
}

impl Client for StubClient {
	fn id(&self) -> EntityId {
		self.id
	}
}

pub(crate) struct StubWaitable {
	id: EntityId,
	ready: bool,
	payload: u32,
	takes: AtomicUsize,
}

impl StubWaitable {
	pub fn new(id: EntityId, ready: bool, payload: u32) -> Arc<Self> {
		Arc::new(Self {
			id,
			ready,
			payload,
			takes: AtomicUsize::new(0),
		})
	}

	pub fn takes(&self) -> usize {
		self.takes.load(Ordering::Relaxed)
	}
}

impl Waitable for StubWaitable {
	fn id(&self) -> EntityId {
		self.id
	}

	fn is_ready(&self, result: &dyn PollResult) -> bool {
		let _ = result;
		self.ready
	}

	fn take_data(&self) -> Payload {
		self.takes.fetch_add(1, Ordering::Relaxed);
		Box::new(self.payload)
	}
}
