//! Ordered, filterable event collections.
//!
//! An `EventStream` keeps events in arrival order, which is not necessarily
//! chronological. Query methods take `&self` and return a new stream; the
//! receiver is never modified. A query that matches nothing returns an empty
//! stream.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use panoptes_core::AggregateId;

use crate::envelope::Event;
use crate::event::EventType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStream {
    events: Vec<Event>,
}

impl EventStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event while building a stream from a source.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Aggregate id of every event, in stream order.
    ///
    /// This is a raw projection of the id field: an aggregate with three
    /// events appears three times. Deduplicate at the call site if needed.
    pub fn aggregate_ids(&self) -> Vec<&AggregateId> {
        self.events.iter().map(Event::aggregate_id).collect()
    }

    /// Events of exactly the given type, relative order preserved.
    pub fn find_by_type(&self, event_type: &EventType) -> EventStream {
        self.filtered(|e| e.event_type() == event_type)
    }

    /// Events belonging to one aggregate, relative order preserved.
    pub fn find_by_aggregate_id(&self, id: &AggregateId) -> EventStream {
        self.filtered(|e| e.aggregate_id() == id)
    }

    /// Events whose aggregate id is any of `ids`, relative order preserved.
    ///
    /// Membership only: listing an id twice does not duplicate its events.
    pub fn find_by_aggregate_ids<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a AggregateId>,
    ) -> EventStream {
        let wanted: HashSet<&str> = ids.into_iter().map(AggregateId::as_str).collect();
        if wanted.is_empty() {
            return EventStream::new();
        }
        self.filtered(|e| wanted.contains(e.aggregate_id().as_str()))
    }

    /// `self` followed by `other`, both in their own order.
    pub fn concat(&self, other: &EventStream) -> EventStream {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Copy of this stream sorted ascending by `occurred_at`.
    ///
    /// The sort is stable: events with equal timestamps keep their current
    /// relative order.
    pub fn sorted_by_occurrence(&self) -> EventStream {
        let mut events = self.events.clone();
        events.sort_by_key(Event::occurred_at);
        EventStream { events }
    }

    fn filtered(&self, predicate: impl Fn(&Event) -> bool) -> EventStream {
        self.events
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }
}

impl From<Vec<Event>> for EventStream {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl FromIterator<Event> for EventStream {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EventStream {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventStream {
    type Item = &'a Event;
    type IntoIter = core::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
