//! Interface boundary of the strand executor core.
//!
//! The scheduling engine in `strand-exec` never owns the things it schedules.
//! This crate defines the seams it observes them through: the five entity
//! capability traits, the callback-group contract, and the poll-result
//! accessors over the underlying wait primitive's slot arrays.

/// Entity identity and per-kind capability traits.
pub mod entity;
/// Callback groups: the schedulability gate and entity enumeration.
pub mod group;
/// Completed poll outcomes and their per-kind ready slots.
pub mod poll;

pub use entity::{Client, EntityId, Payload, Service, Subscription, Timer, Waitable};
pub use group::{BasicCallbackGroup, CallbackGroup, EntityVisitor};
pub use poll::{PollOutcome, PollResult, SlotPollResult};
