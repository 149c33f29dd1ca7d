use crate::entity::EntityId;

/// Classification of one completed poll over the registered wait primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollOutcome {
	/// At least one registered primitive fired; the slot arrays are valid.
	Ready,
	/// The poll's deadline elapsed with nothing ready.
	Timeout,
	/// The poll had nothing registered to wait on.
	#[default]
	Empty,
}

/// Accessor view over a completed poll result.
///
/// The underlying poll primitive stores readiness positionally: one
/// fixed-size slot array per array-backed entity kind, where a populated
/// slot carries the identity token of a ready entity and an unpopulated
/// slot is `None`. Waitables are not represented here at all; they are
/// probed individually via [`Waitable::is_ready`](crate::Waitable::is_ready),
/// which receives the whole result.
///
/// Slot arrays are only meaningful when [`outcome`](Self::outcome) is
/// [`PollOutcome::Ready`].
pub trait PollResult {
	fn outcome(&self) -> PollOutcome;
	fn timer_slots(&self) -> &[Option<EntityId>];
	fn subscription_slots(&self) -> &[Option<EntityId>];
	fn service_slots(&self) -> &[Option<EntityId>];
	fn client_slots(&self) -> &[Option<EntityId>];
}

/// Owned [`PollResult`] backed by plain slot vectors.
///
/// Poll primitives that surface their raw arrays can adapt them directly;
/// tests build synthetic results without any poll primitive at all.
#[derive(Debug, Default)]
pub struct SlotPollResult {
	outcome: PollOutcome,
	timers: Vec<Option<EntityId>>,
	subscriptions: Vec<Option<EntityId>>,
	services: Vec<Option<EntityId>>,
	clients: Vec<Option<EntityId>>,
}

impl SlotPollResult {
	/// A ready result with no slots populated yet.
	pub fn ready() -> Self {
		Self {
			outcome: PollOutcome::Ready,
			..Self::default()
		}
	}

	/// A timed-out result.
	pub fn timeout() -> Self {
		Self {
			outcome: PollOutcome::Timeout,
			..Self::default()
		}
	}

	/// An empty result.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Appends a timer slot, populated or not.
	pub fn push_timer_slot(&mut self, slot: Option<EntityId>) {
		self.timers.push(slot);
	}

	/// Appends a subscription slot, populated or not.
	pub fn push_subscription_slot(&mut self, slot: Option<EntityId>) {
		self.subscriptions.push(slot);
	}

	/// Appends a service slot, populated or not.
	pub fn push_service_slot(&mut self, slot: Option<EntityId>) {
		self.services.push(slot);
	}

	/// Appends a client slot, populated or not.
	pub fn push_client_slot(&mut self, slot: Option<EntityId>) {
		self.clients.push(slot);
	}

	/// Marks a timer ready.
	pub fn mark_timer(&mut self, id: EntityId) {
		self.push_timer_slot(Some(id));
	}

	/// Marks a subscription ready.
	pub fn mark_subscription(&mut self, id: EntityId) {
		self.push_subscription_slot(Some(id));
	}

	/// Marks a service ready.
	pub fn mark_service(&mut self, id: EntityId) {
		self.push_service_slot(Some(id));
	}

	/// Marks a client ready.
	pub fn mark_client(&mut self, id: EntityId) {
		self.push_client_slot(Some(id));
	}
}

impl PollResult for SlotPollResult {
	fn outcome(&self) -> PollOutcome {
		self.outcome
	}

	fn timer_slots(&self) -> &[Option<EntityId>] {
		&self.timers
	}

	fn subscription_slots(&self) -> &[Option<EntityId>] {
		&self.subscriptions
	}

	fn service_slots(&self) -> &[Option<EntityId>] {
		&self.services
	}

	fn client_slots(&self) -> &[Option<EntityId>] {
		&self.clients
	}
}
