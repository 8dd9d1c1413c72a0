//! Projection error taxonomy.
//!
//! Both variants are data-integrity defects in the input stream: they abort
//! the projection they occur in and are never retried. Finding nothing is not
//! an error and has no variant here.

use thiserror::Error;

use panoptes_core::AggregateId;

use crate::event::{EventType, PayloadKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The aggregate has no transition for this event type.
    #[error("unsupported event type `{event_type}` for {aggregate_type} `{aggregate_id}`")]
    UnsupportedEventType {
        aggregate_type: &'static str,
        aggregate_id: AggregateId,
        event_type: EventType,
    },

    /// The payload variant does not match what the event type requires.
    #[error(
        "malformed event `{event_type}` on `{aggregate_id}`: expected {expected} payload, found {found}"
    )]
    MalformedEvent {
        aggregate_id: AggregateId,
        event_type: EventType,
        expected: PayloadKind,
        found: PayloadKind,
    },
}

impl ProjectionError {
    pub fn event_type(&self) -> &EventType {
        match self {
            ProjectionError::UnsupportedEventType { event_type, .. }
            | ProjectionError::MalformedEvent { event_type, .. } => event_type,
        }
    }
}
