//! Persistent event storage.

mod seed;
mod sqlite;

pub use seed::seed_events;
pub use sqlite::SqliteStore;

use crate::error::EventFinderResult;
use crate::event::{Event, NewEvent};
use crate::geo::EventFilter;

/// The storage collaborator behind every request.
///
/// Each operation is a single statement, so atomicity comes from the
/// database; callers never need their own locking.
pub trait EventStore: Send + Sync {
    /// Events matching the exact-match filters, in ascending id order.
    fn list_events(&self, filter: &EventFilter) -> EventFinderResult<Vec<Event>>;

    /// Fails with `EventNotFound` when no event has this id.
    fn get_event(&self, id: i64) -> EventFinderResult<Event>;

    /// Store a validated event and return its new id.
    fn insert_event(&self, event: &NewEvent) -> EventFinderResult<i64>;

    /// Fails with `EventNotFound` when no event has this id.
    fn delete_event(&self, id: i64) -> EventFinderResult<()>;

    fn count(&self) -> EventFinderResult<usize>;
}
