//! Entity-readiness reconciliation and dispatch for a callback-driven executor.
//!
//! The outer executor loop owns the blocking poll and the threads that run
//! callbacks; this crate owns the step in between. It indexes the entities
//! registered for scheduling ([`EntityCollection`]), rebuilds that index from
//! the live callback groups ([`build_entities_collection`]), and, once a poll
//! completes, turns the poll result into a deterministic, ordered queue of
//! ready executables ([`ready_executables`]).
//!
//! Entities and groups are owned by the application; everything here holds
//! weak handles and degrades to a silent skip when the other side has been
//! destroyed mid-cycle. There are no error values anywhere in this crate:
//! dead entities, dead groups, timed-out polls, and spurious timer wakeups
//! are all expected outcomes, not faults.

/// Collection rebuild from the live callback-group set.
pub mod build;
/// The per-kind index of registered entities.
pub mod collection;
/// Readiness resolution and dispatch-queue production.
pub mod resolve;

#[cfg(test)]
pub(crate) mod testing;

pub use build::build_entities_collection;
pub use collection::EntityCollection;
pub use resolve::{Executable, ReadyEntity, ready_executables};
