use std::sync::Arc;

use super::*;
use crate::entity::EntityId;

struct StubTimer(EntityId);

impl Timer for StubTimer {
	fn id(&self) -> EntityId {
		self.0
	}

	fn claim(&self) -> bool {
		true
	}
}

struct StubSubscription(EntityId);

impl Subscription for StubSubscription {
	fn id(&self) -> EntityId {
		self.0
	}
}

#[derive(Default)]
struct Collect {
	timers: Vec<EntityId>,
	subscriptions: Vec<EntityId>,
	others: usize,
}

impl EntityVisitor for Collect {
	fn timer(&mut self, timer: &Arc<dyn Timer>) {
		self.timers.push(timer.id());
	}

	fn subscription(&mut self, subscription: &Arc<dyn Subscription>) {
		self.subscriptions.push(subscription.id());
	}

	fn service(&mut self, _service: &Arc<dyn Service>) {
		self.others += 1;
	}

	fn client(&mut self, _client: &Arc<dyn Client>) {
		self.others += 1;
	}

	fn waitable(&mut self, _waitable: &Arc<dyn Waitable>) {
		self.others += 1;
	}
}

#[test]
fn new_group_is_schedulable() {
	let group = BasicCallbackGroup::new();
	assert!(group.is_schedulable());
	group.set_schedulable(false);
	assert!(!group.is_schedulable());
	group.set_schedulable(true);
	assert!(group.is_schedulable());
}

#[test]
fn visit_enumerates_live_entities_per_kind() {
	let group = BasicCallbackGroup::new();
	let timer: Arc<dyn Timer> = Arc::new(StubTimer(1));
	let sub_a: Arc<dyn Subscription> = Arc::new(StubSubscription(2));
	let sub_b: Arc<dyn Subscription> = Arc::new(StubSubscription(3));
	group.add_timer(&timer);
	group.add_subscription(&sub_a);
	group.add_subscription(&sub_b);

	let mut collect = Collect::default();
	group.visit_entities(&mut collect);
	assert_eq!(collect.timers, vec![1]);
	assert_eq!(collect.subscriptions, vec![2, 3]);
	assert_eq!(collect.others, 0);
}

#[test]
fn visit_skips_dropped_entities() {
	let group = BasicCallbackGroup::new();
	let timer: Arc<dyn Timer> = Arc::new(StubTimer(1));
	group.add_timer(&timer);
	{
		let short_lived: Arc<dyn Subscription> = Arc::new(StubSubscription(2));
		group.add_subscription(&short_lived);
	}

	let mut collect = Collect::default();
	group.visit_entities(&mut collect);
	assert_eq!(collect.timers, vec![1]);
	assert!(collect.subscriptions.is_empty());
}

#[test]
fn prune_drops_dead_entries() {
	let group = BasicCallbackGroup::new();
	{
		let short_lived: Arc<dyn Timer> = Arc::new(StubTimer(7));
		group.add_timer(&short_lived);
	}
	group.prune();
	assert!(group.lists.read().timers.is_empty());
}
