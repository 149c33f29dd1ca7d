use std::sync::{Arc, Weak};

use strand_core::{CallbackGroup, Client, EntityVisitor, Service, Subscription, Timer, Waitable};

use crate::collection::{CollectionEntry, EntityCollection};


/// Visitor that records every enumerated entity under its owning group.
struct CollectionInserter<'a> {
	collection: &'a mut EntityCollection,
	group: Weak<dyn CallbackGroup>,
}

impl EntityVisitor for CollectionInserter<'_> {
	fn timer(&mut self, timer: &Arc<dyn Timer>) {
		self.collection.insert_timer(
			timer.id(),
			CollectionEntry {
				entity: Arc::downgrade(timer),
				group: self.group.clone(),
			},
		);
	}

	fn subscription(&mut self, subscription: &Arc<dyn Subscription>) {
		self.collection.insert_subscription(
			subscription.id(),
			CollectionEntry {
				entity: Arc::downgrade(subscription),
				group: self.group.clone(),
			},
		);
	}

	fn service(&mut self, service: &Arc<dyn Service>) {
		self.collection.insert_service(
			service.id(),
			CollectionEntry {
				entity: Arc::downgrade(service),
				group: self.group.clone(),
			},
		);
	}

	fn client(&mut self, client: &Arc<dyn Client>) {
		self.collection.insert_client(
			client.id(),
			CollectionEntry {
				entity: Arc::downgrade(client),
				group: self.group.clone(),
			},
		);
	}

	fn waitable(&mut self, waitable: &Arc<dyn Waitable>) {
		self.collection.insert_waitable(
			waitable.id(),
			CollectionEntry {
				entity: Arc::downgrade(waitable),
				group: self.group.clone(),
			},
		);
	}
}

/// Rebuilds `collection` from the live callback-group set.
///
/// Groups are taken in input order. A group that no longer exists is skipped
/// silently; groups are destroyed independently of the executor's
/// bookkeeping cycle and this is not an error. A group that is live but not
/// currently schedulable is skipped wholesale: its entities are simply
/// absent from the collection this cycle, not marked disabled.
pub fn build_entities_collection(groups: &[Weak<dyn CallbackGroup>], collection: &mut EntityCollection) {
	collection.clear();

	let mut visited_groups = 0usize;
	for weak_group in groups {
		let Some(group) = weak_group.upgrade() else {
			continue;
		};
		if !group.is_schedulable() {
			continue;
		}
		visited_groups += 1;
		let mut inserter = CollectionInserter {
			collection: &mut *collection,
			group: weak_group.clone(),
		};
		group.visit_entities(&mut inserter);
	}

	tracing::trace!(
		groups = groups.len(),
		visited_groups,
		entities = collection.len(),
		"rebuilt entities collection"
	);
}
