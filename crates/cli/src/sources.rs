//! Built-in event sources.
//!
//! Ingestion from the real GitHub and Jira APIs is not part of this tool; the
//! command runs against these fixed, already materialized streams.

use chrono::{DateTime, Duration, TimeZone, Utc};

use panoptes_events::{Event, EventPayload, EventStream, EventType};
use panoptes_github::{ISSUE_LINKED, PULL_REQUEST_MERGED, PULL_REQUEST_OPENED};
use panoptes_jira::{ISSUE_COMPLETED, ISSUE_CREATED, ISSUE_STATUS_CHANGED};

/// The two streams a correlation pass runs over.
#[derive(Debug, Clone)]
pub struct Sources {
    /// Version control events (GitHub).
    pub primary: EventStream,
    /// Issue tracker events (Jira).
    pub secondary: EventStream,
}

impl Sources {
    pub fn demo() -> Self {
        Self {
            primary: github_events(),
            secondary: jira_events(),
        }
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn at(id: &str, event_type: EventType, hours: i64, payload: EventPayload) -> Event {
    Event::new(id, event_type, epoch() + Duration::hours(hours), payload)
}

pub fn github_events() -> EventStream {
    EventStream::from(vec![
        at("1234", PULL_REQUEST_OPENED, 12, EventPayload::Empty),
        at("1234", ISSUE_LINKED, 24, EventPayload::linked("TEST-123")),
        at("1234", PULL_REQUEST_MERGED, 36, EventPayload::Empty),
    ])
}

pub fn jira_events() -> EventStream {
    EventStream::from(vec![
        at("TEST-123", ISSUE_CREATED, 18, EventPayload::Empty),
        at("TEST-123", ISSUE_STATUS_CHANGED, 19, EventPayload::Empty),
        at("TEST-123", ISSUE_STATUS_CHANGED, 20, EventPayload::Empty),
        at("TEST-123", ISSUE_STATUS_CHANGED, 30, EventPayload::Empty),
        at("TEST-123", ISSUE_COMPLETED, 48, EventPayload::Empty),
    ])
}
