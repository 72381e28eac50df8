//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots whose state changes are expressed as events.
///
/// Operations validate, build an event, and hand it to [`apply`]; the event is
/// then kept as uncommitted until an observer drains it.
///
/// [`apply`]: AggregateRoot::apply
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events produced since the last drain.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events once an observer has consumed them.
    fn clear_uncommitted_events(&mut self);
}
