//! Jira source module.
//!
//! Issues are only ever correlated against, never projected, so this crate
//! carries the event catalogue alone.

use panoptes_events::EventType;

pub const ISSUE_CREATED: EventType = EventType::from_static("jira.issue_created");
pub const ISSUE_STATUS_CHANGED: EventType = EventType::from_static("jira.issue_status_changed");
pub const ISSUE_COMPLETED: EventType = EventType::from_static("jira.issue_completed");

/// Every Jira event type this system knows about.
pub const ALL: [EventType; 3] = [ISSUE_CREATED, ISSUE_STATUS_CHANGED, ISSUE_COMPLETED];

/// Whether an event type belongs to the Jira catalogue.
pub fn is_known(event_type: &EventType) -> bool {
    ALL.contains(event_type)
}
