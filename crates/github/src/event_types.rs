use panoptes_events::{EventType, PayloadKind};

pub const PULL_REQUEST_OPENED: EventType = EventType::from_static("github.pull_request_opened");
pub const PULL_REQUEST_MERGED: EventType = EventType::from_static("github.pull_request_merged");
pub const ISSUE_LINKED: EventType = EventType::from_static("github.issue_linked_to_pr");
pub const ISSUE_UNLINKED: EventType = EventType::from_static("github.issue_unlinked_to_pr");

/// The closed set of event types a `PullRequest` understands.
///
/// Matching on this enum (rather than on raw strings) is what makes the
/// aggregate's transition table exhaustive at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PullRequestEventType {
    Opened,
    Merged,
    IssueLinked,
    IssueUnlinked,
}

impl PullRequestEventType {
    pub const ALL: [PullRequestEventType; 4] = [
        PullRequestEventType::Opened,
        PullRequestEventType::Merged,
        PullRequestEventType::IssueLinked,
        PullRequestEventType::IssueUnlinked,
    ];

    pub fn event_type(self) -> EventType {
        match self {
            PullRequestEventType::Opened => PULL_REQUEST_OPENED,
            PullRequestEventType::Merged => PULL_REQUEST_MERGED,
            PullRequestEventType::IssueLinked => ISSUE_LINKED,
            PullRequestEventType::IssueUnlinked => ISSUE_UNLINKED,
        }
    }

    /// Payload variant an event of this type must carry.
    pub fn expected_payload(self) -> PayloadKind {
        match self {
            PullRequestEventType::Opened | PullRequestEventType::Merged => PayloadKind::Empty,
            PullRequestEventType::IssueLinked | PullRequestEventType::IssueUnlinked => {
                PayloadKind::Linked
            }
        }
    }

    pub fn from_event_type(event_type: &EventType) -> Option<Self> {
        Self::ALL.into_iter().find(|t| &t.event_type() == event_type)
    }
}
