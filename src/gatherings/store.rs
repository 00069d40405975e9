//! The event store: the canonical ordered list of events.
//!
//! The store is in-memory and newest-first: a submission is validated,
//! given a fresh id, and prepended, so new events float to the top of the
//! `all` view. There is no update and no delete — events are immutable for
//! the lifetime of the process, and `submit` is the only mutation point.

use crate::model::{Event, EventInput};
use crate::seed;
use crate::validate::{validate_event_input, ValidationError};
use chrono::Utc;

/// Ordered, append-at-front collection of events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    /// Highest numeric id handed out so far, for collision-free minting.
    last_id: i64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `events`, preserving their order.
    pub fn with_events(events: Vec<Event>) -> Self {
        let last_id = events
            .iter()
            .filter_map(|event| event.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { events, last_id }
    }

    /// A store holding the seed catalog.
    pub fn seeded() -> Self {
        Self::with_events(seed::seed_events())
    }

    /// Validate a candidate and, if it passes, prepend it as a new event.
    ///
    /// On rejection the store is untouched and the error lists every
    /// failing field.
    pub fn submit(&mut self, input: EventInput) -> Result<Event, ValidationError> {
        validate_event_input(&input)?;
        let id = self.next_id().to_string();
        let event = Event::from_input(id, input);
        self.events.insert(0, event.clone());
        Ok(event)
    }

    /// Millisecond timestamp, bumped past the last issued id so that two
    /// submissions within the same millisecond still get distinct ids.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last_id { now } else { self.last_id + 1 };
        self.last_id = id;
        id
    }

    /// All events, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
