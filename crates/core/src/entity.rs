use std::any::Any;

use crate::poll::PollResult;

/// Stable identity token for one registered entity.
///
/// Opaque to the scheduling core: it is only ever used as a lookup key to
/// reconcile poll slots against collection entries. Embedders typically use
/// the address of the entity's native handle or a handle-table index; the
/// only requirement is that the value is unique among live entities of one
/// kind and stable for the lifetime of the registration.
pub type EntityId = usize;

/// Opaque payload extracted from a [`Waitable`] at readiness-detection time.
pub type Payload = Box<dyn Any + Send>;

/// A timer entity.
pub trait Timer: Send + Sync {
	/// Identity token for collection lookup.
	fn id(&self) -> EntityId;

	/// Confirms genuine expiry and consumes the due state.
	///
	/// Returns `false` when the poll wakeup was spurious (the timer was
	/// rearmed or cancelled between the poll completing and resolution),
	/// in which case the timer must not be dispatched.
	fn claim(&self) -> bool;
}

/// A subscription entity.
pub trait Subscription: Send + Sync {
	/// Identity token for collection lookup.
	fn id(&self) -> EntityId;
}

/// A service entity.
pub trait Service: Send + Sync {
	/// Identity token for collection lookup.
	fn id(&self) -> EntityId;
}

/// A client entity.
pub trait Client: Send + Sync {
	/// Identity token for collection lookup.
	fn id(&self) -> EntityId;
}

/// A waitable entity.
///
/// Waitables are not slotted into the poll structure's fixed arrays. They
/// register whatever primitives they like with the underlying poll, and are
/// probed individually against the completed result. Their payload is
/// extracted eagerly when readiness is detected, unlike the other four kinds
/// whose payload extraction happens later in the outer executor.
pub trait Waitable: Send + Sync {
	/// Identity token for collection lookup.
	fn id(&self) -> EntityId;

	/// Inspects the completed poll result for this waitable's primitives.
	fn is_ready(&self, result: &dyn PollResult) -> bool;

	/// Extracts the pending payload. Called at most once per readiness.
	fn take_data(&self) -> Payload;
}
