use std::collections::BTreeMap;
use std::sync::Weak;

use strand_core::{CallbackGroup, Client, EntityId, Service, Subscription, Timer, Waitable};


/// Non-owning record for one registered entity.
///
/// Both sides are owned by the application graph; either may be destroyed
/// between the rebuild that inserted this entry and the resolution pass that
/// reads it, so every use starts with an upgrade-or-skip.
pub(crate) struct CollectionEntry<T: ?Sized> {
	pub entity: Weak<T>,
	pub group: Weak<dyn CallbackGroup>,
}

/// Index of all entities currently registered for scheduling.
///
/// Five partitions, one per entity kind, each keyed by identity token.
/// Rebuilt wholesale by [`build_entities_collection`](crate::build_entities_collection)
/// and read-only for the resolver in between.
/// Ordered maps keep waitable iteration deterministic (ascending token),
/// matching the fixed dispatch order the resolver guarantees.
#[derive(Default)]
pub struct EntityCollection {
	pub(crate) timers: BTreeMap<EntityId, CollectionEntry<dyn Timer>>,
	pub(crate) subscriptions: BTreeMap<EntityId, CollectionEntry<dyn Subscription>>,
	pub(crate) services: BTreeMap<EntityId, CollectionEntry<dyn Service>>,
	pub(crate) clients: BTreeMap<EntityId, CollectionEntry<dyn Client>>,
	pub(crate) waitables: BTreeMap<EntityId, CollectionEntry<dyn Waitable>>,
}

impl EntityCollection {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// True iff every partition is empty.
	pub fn is_empty(&self) -> bool {
		self.timers.is_empty()
			&& self.subscriptions.is_empty()
			&& self.services.is_empty()
			&& self.clients.is_empty()
			&& self.waitables.is_empty()
	}

	/// Total number of entries across all partitions.
	pub fn len(&self) -> usize {
		self.timers.len()
			+ self.subscriptions.len()
			+ self.services.len()
			+ self.clients.len()
			+ self.waitables.len()
	}

	/// Empties every partition. Idempotent.
	pub fn clear(&mut self) {
		self.timers.clear();
		self.subscriptions.clear();
		self.services.clear();
		self.clients.clear();
		self.waitables.clear();
	}

	pub(crate) fn insert_timer(&mut self, id: EntityId, entry: CollectionEntry<dyn Timer>) {
		insert(&mut self.timers, id, entry);
	}

	pub(crate) fn insert_subscription(&mut self, id: EntityId, entry: CollectionEntry<dyn Subscription>) {
		insert(&mut self.subscriptions, id, entry);
	}

	pub(crate) fn insert_service(&mut self, id: EntityId, entry: CollectionEntry<dyn Service>) {
		insert(&mut self.services, id, entry);
	}

	pub(crate) fn insert_client(&mut self, id: EntityId, entry: CollectionEntry<dyn Client>) {
		insert(&mut self.clients, id, entry);
	}

	pub(crate) fn insert_waitable(&mut self, id: EntityId, entry: CollectionEntry<dyn Waitable>) {
		insert(&mut self.waitables, id, entry);
	}
}

/// Last-writer-wins insert.
///
/// Two simultaneously-live entities sharing a token is an invariant
/// violation in the embedder, not a runtime-recoverable condition.
fn insert<T: ?Sized>(partition: &mut BTreeMap<EntityId, CollectionEntry<T>>, id: EntityId, entry: CollectionEntry<T>) {
	let previous = partition.insert(id, entry);
	debug_assert!(
		previous.is_none_or(|previous| previous.entity.strong_count() == 0),
		"two live entities share identity token {id}"
	);
}
