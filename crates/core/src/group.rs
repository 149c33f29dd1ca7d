use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::entity::{Client, Service, Subscription, Timer, Waitable};

#[cfg(test)]
mod tests;

/// Per-kind callback invoked while a group enumerates its owned entities.
pub trait EntityVisitor {
	fn timer(&mut self, timer: &Arc<dyn Timer>);
	fn subscription(&mut self, subscription: &Arc<dyn Subscription>);
	fn service(&mut self, service: &Arc<dyn Service>);
	fn client(&mut self, client: &Arc<dyn Client>);
	fn waitable(&mut self, waitable: &Arc<dyn Waitable>);
}

/// An independently enable/disable-able owner of a set of entities.
///
/// Groups are owned by the application, not by the executor; the scheduling
/// core holds only weak handles to them and reads their state across threads.
pub trait CallbackGroup: Send + Sync {
	/// Whether this group currently accepts scheduling.
	///
	/// A single-word flag, safe to read concurrently with mutation by other
	/// threads (e.g. a worker re-enabling the group after a callback
	/// finishes). Atomic load semantics suffice; no lock is held.
	fn is_schedulable(&self) -> bool;

	/// Enumerates owned entities, one visitor call per live entity.
	///
	/// Only invoked while the group is schedulable.
	fn visit_entities(&self, visitor: &mut dyn EntityVisitor);
}

#[derive(Default)]
struct EntityLists {
	timers: Vec<Weak<dyn Timer>>,
	subscriptions: Vec<Weak<dyn Subscription>>,
	services: Vec<Weak<dyn Service>>,
	clients: Vec<Weak<dyn Client>>,
	waitables: Vec<Weak<dyn Waitable>>,
}

/// Reference [`CallbackGroup`] implementation.
///
/// Holds weak per-kind entity lists so that registration never extends an
/// entity's lifetime; dead entries are skipped during enumeration and can be
/// dropped with [`prune`](Self::prune). Suitable for embedders that do not
/// need custom ownership bookkeeping.
pub struct BasicCallbackGroup {
	lists: RwLock<EntityLists>,
	schedulable: AtomicBool,
}

impl BasicCallbackGroup {
	/// Creates an empty, schedulable group.
	pub fn new() -> Self {
		Self {
			lists: RwLock::new(EntityLists::default()),
			schedulable: AtomicBool::new(true),
		}
	}

	/// Sets the schedulability flag.
	pub fn set_schedulable(&self, schedulable: bool) {
		self.schedulable.store(schedulable, Ordering::Release);
	}

	/// Registers a timer.
	pub fn add_timer(&self, timer: &Arc<dyn Timer>) {
		self.lists.write().timers.push(Arc::downgrade(timer));
	}

	/// Registers a subscription.
	pub fn add_subscription(&self, subscription: &Arc<dyn Subscription>) {
		self.lists.write().subscriptions.push(Arc::downgrade(subscription));
	}

	/// Registers a service.
	pub fn add_service(&self, service: &Arc<dyn Service>) {
		self.lists.write().services.push(Arc::downgrade(service));
	}

	/// Registers a client.
	pub fn add_client(&self, client: &Arc<dyn Client>) {
		self.lists.write().clients.push(Arc::downgrade(client));
	}

	/// Registers a waitable.
	pub fn add_waitable(&self, waitable: &Arc<dyn Waitable>) {
		self.lists.write().waitables.push(Arc::downgrade(waitable));
	}

	/// Drops list entries whose entity no longer exists.
	pub fn prune(&self) {
		let mut lists = self.lists.write();
		lists.timers.retain(|weak| weak.strong_count() > 0);
		lists.subscriptions.retain(|weak| weak.strong_count() > 0);
		lists.services.retain(|weak| weak.strong_count() > 0);
		lists.clients.retain(|weak| weak.strong_count() > 0);
		lists.waitables.retain(|weak| weak.strong_count() > 0);
	}
}

impl Default for BasicCallbackGroup {
	fn default() -> Self {
		Self::new()
	}
}

impl CallbackGroup for BasicCallbackGroup {
	fn is_schedulable(&self) -> bool {
		self.schedulable.load(Ordering::Acquire)
	}

	fn visit_entities(&self, visitor: &mut dyn EntityVisitor) {
		let lists = self.lists.read();
		for weak in &lists.timers {
			if let Some(timer) = weak.upgrade() {
				visitor.timer(&timer);
			}
		}
		for weak in &lists.subscriptions {
			if let Some(subscription) = weak.upgrade() {
				visitor.subscription(&subscription);
			}
		}
		for weak in &lists.services {
			if let Some(service) = weak.upgrade() {
				visitor.service(&service);
			}
		}
		for weak in &lists.clients {
			if let Some(client) = weak.upgrade() {
				visitor.client(&client);
			}
		}
		for weak in &lists.waitables {
			if let Some(waitable) = weak.upgrade() {
				visitor.waitable(&waitable);
			}
		}
	}
}
