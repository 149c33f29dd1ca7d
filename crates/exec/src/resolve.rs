use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Weak};

use rustc_hash::{FxHashMap, FxHashSet};
use strand_core::{
	CallbackGroup, Client, EntityId, Payload, PollOutcome, PollResult, Service, Subscription, Timer, Waitable,
};

use crate::collection::{CollectionEntry, EntityCollection};


/// A ready entity, with kind-specific context.
///
/// Waitables carry their payload, extracted eagerly at readiness-detection
/// time; for every other kind, payload extraction is the outer executor's
/// responsibility when it runs the callback.
pub enum ReadyEntity {
	Timer(Arc<dyn Timer>),
	Subscription(Arc<dyn Subscription>),
	Service(Arc<dyn Service>),
	Client(Arc<dyn Client>),
	Waitable {
		waitable: Arc<dyn Waitable>,
		payload: Payload,
	},
}

impl ReadyEntity {
	/// Identity token of the underlying entity.
	pub fn id(&self) -> EntityId {
		match self {
			Self::Timer(timer) => timer.id(),
			Self::Subscription(subscription) => subscription.id(),
			Self::Service(service) => service.id(),
			Self::Client(client) => client.id(),
			Self::Waitable { waitable, .. } => waitable.id(),
		}
	}
}

/// One dispatch-queue entry: a ready entity and its resolved owning group.
///
/// `group` is `None` when the owning group was destroyed between the
/// collection rebuild and this resolution pass; such orphaned entities are
/// dispatched ungoverned rather than dropped. The strong references here
/// live only until the outer executor consumes the entry.
pub struct Executable {
	pub entity: ReadyEntity,
	pub group: Option<Arc<dyn CallbackGroup>>,
}

/// Schedulability snapshot for one owning group.
struct GroupSnapshot {
	group: Option<Arc<dyn CallbackGroup>>,
	schedulable: bool,
}

impl GroupSnapshot {
	/// The filtering rule: only a live group that currently refuses
	/// scheduling blocks dispatch. A destroyed group does not.
	fn blocks_dispatch(&self) -> bool {
		self.group.is_some() && !self.schedulable
	}
}

/// Per-pass memoization of group upgrades and schedulability reads.
///
/// Keyed by the weak handle's allocation address, which stays stable while
/// any weak reference exists. Scoped to a single resolution pass and then
/// discarded, so a stale snapshot can never outlive the pass; within the
/// pass it guarantees all of a group's entities see one consistent
/// schedulability decision even while other threads flip the flag.
#[derive(Default)]
struct GroupCache {
	snapshots: FxHashMap<usize, GroupSnapshot>,
}

impl GroupCache {
	fn snapshot(&mut self, weak: &Weak<dyn CallbackGroup>) -> &GroupSnapshot {
		let key = weak.as_ptr().cast::<()>() as usize;
		self.snapshots.entry(key).or_insert_with(|| {
			let group = weak.upgrade();
			let schedulable = group.as_ref().is_some_and(|group| group.is_schedulable());
			GroupSnapshot { group, schedulable }
		})
	}
}

/// Walks one array-backed kind's poll slots in ascending index order.
///
/// `claim` vetoes dispatch after all other gates pass; only timers use it.
fn resolve_slots<T: ?Sized>(
	slots: &[Option<EntityId>],
	partition: &BTreeMap<EntityId, CollectionEntry<T>>,
	groups: &mut GroupCache,
	claim: impl Fn(&Arc<T>) -> bool,
	wrap: impl Fn(Arc<T>) -> ReadyEntity,
	executables: &mut VecDeque<Executable>,
) -> usize {
	let mut added = 0;
	let mut dispatched = FxHashSet::default();
	for slot in slots {
		// Not every slot is populated every poll.
		let Some(id) = *slot else {
			continue;
		};
		// A token repeated in the slot array is dispatched once.
		if dispatched.contains(&id) {
			continue;
		}
		// Absent entries are expected: the entity was deregistered after
		// being included in the poll but before resolution.
		let Some(entry) = partition.get(&id) else {
			continue;
		};
		let Some(entity) = entry.entity.upgrade() else {
			continue;
		};
		let snapshot = groups.snapshot(&entry.group);
		if snapshot.blocks_dispatch() {
			continue;
		}
		if !claim(&entity) {
			continue;
		}
		dispatched.insert(id);
		executables.push_back(Executable {
			entity: wrap(entity),
			group: snapshot.group.clone(),
		});
		added += 1;
	}
	added
}

/// Probes every registered waitable against the completed poll result.
///
/// Waitables have no poll slots; the collection partition itself is walked,
/// in ascending token order, and each live waitable inspects whatever
/// primitives it registered. Payload is extracted eagerly on readiness.
fn resolve_waitables(
	partition: &BTreeMap<EntityId, CollectionEntry<dyn Waitable>>,
	poll: &dyn PollResult,
	groups: &mut GroupCache,
	executables: &mut VecDeque<Executable>,
) -> usize {
	let mut added = 0;
	for entry in partition.values() {
		let Some(waitable) = entry.entity.upgrade() else {
			continue;
		};
		if !waitable.is_ready(poll) {
			continue;
		}
		let snapshot = groups.snapshot(&entry.group);
		if snapshot.blocks_dispatch() {
			continue;
		}
		let payload = waitable.take_data();
		executables.push_back(Executable {
			entity: ReadyEntity::Waitable { waitable, payload },
			group: snapshot.group.clone(),
		});
		added += 1;
	}
	added
}

/// Resolves a completed poll against the collection and appends every ready,
/// dispatchable entity to `executables`. Returns the number appended.
///
/// A non-[`Ready`](PollOutcome::Ready) poll outcome is a no-op returning 0;
/// timeouts are an expected, frequent outcome of polling, not an error.
///
/// Kinds are processed in a fixed order (Timer, Subscription, Service,
/// Client, Waitable), with array-backed kinds in slot order and waitables in
/// ascending token order, so dispatch ordering is reproducible across runs
/// with identical inputs. A timer whose [`claim`](Timer::claim) reports a
/// spurious wakeup is skipped. Group schedulability is observed at most once
/// per group per call.
pub fn ready_executables(
	collection: &EntityCollection,
	poll: &dyn PollResult,
	executables: &mut VecDeque<Executable>,
) -> usize {
	if poll.outcome() != PollOutcome::Ready {
		return 0;
	}

	let mut groups = GroupCache::default();
	let mut added = 0;

	added += resolve_slots(
		poll.timer_slots(),
		&collection.timers,
		&mut groups,
		|timer| timer.claim(),
		ReadyEntity::Timer,
		executables,
	);
	added += resolve_slots(
		poll.subscription_slots(),
		&collection.subscriptions,
		&mut groups,
		|_| true,
		ReadyEntity::Subscription,
		executables,
	);
	added += resolve_slots(
		poll.service_slots(),
		&collection.services,
		&mut groups,
		|_| true,
		ReadyEntity::Service,
		executables,
	);
	added += resolve_slots(
		poll.client_slots(),
		&collection.clients,
		&mut groups,
		|_| true,
		ReadyEntity::Client,
		executables,
	);
	added += resolve_waitables(&collection.waitables, poll, &mut groups, executables);

	tracing::trace!(added, "resolved ready executables");
	added
}
