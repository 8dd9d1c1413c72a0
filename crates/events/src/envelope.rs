use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use panoptes_core::AggregateId;

use crate::event::{EventPayload, EventType};

/// Envelope for a single domain event.
///
/// This is the unit every stream is made of. Events are facts: fields are
/// private and there are no setters.
///
/// Notes:
/// - `occurred_at` is business time in UTC. It is used for ordering only and
///   never to enforce causality.
/// - `payload` is the closed payload union; its variant must match what the
///   event type expects, which projections verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    aggregate_id: AggregateId,
    event_type: EventType,
    occurred_at: DateTime<Utc>,
    payload: EventPayload,
}

impl Event {
    pub fn new(
        aggregate_id: impl Into<AggregateId>,
        event_type: EventType,
        occurred_at: DateTime<Utc>,
        payload: EventPayload,
    ) -> Self {
        Self {
            aggregate_id: aggregate_id.into(),
            event_type,
            occurred_at,
            payload,
        }
    }

    pub fn aggregate_id(&self) -> &AggregateId {
        &self.aggregate_id
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }
}
