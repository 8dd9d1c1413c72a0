use serde::{Deserialize, Serialize};

use panoptes_core::{Aggregate, AggregateId};
use panoptes_events::{Event, EventPayload, EventStream, ProjectionError, project};

use crate::event_types::PullRequestEventType;

/// Pull request lifecycle.
///
/// Variants are declared in lifecycle order; the derived `Ord` is what keeps
/// status transitions forward-only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestStatus {
    #[default]
    Unknown,
    Open,
    Merged,
}

/// Aggregate: PullRequest.
///
/// Derived entirely from GitHub events. `linked_issues` holds each issue key
/// at most once, in first-link order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    status: PullRequestStatus,
    linked_issues: Vec<AggregateId>,
}

impl PullRequest {
    /// Project a pull request from its (already filtered) event stream.
    pub fn from_stream(stream: &EventStream) -> Result<Self, ProjectionError> {
        project(Self::default(), stream)
    }

    pub fn status(&self) -> PullRequestStatus {
        self.status
    }

    pub fn linked_issues(&self) -> &[AggregateId] {
        &self.linked_issues
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    fn advance(&mut self, to: PullRequestStatus) {
        self.status = self.status.max(to);
    }

    fn add_issue_ref(&mut self, id: &AggregateId) {
        if self.linked_issues.contains(id) {
            return;
        }
        self.linked_issues.push(id.clone());
    }

    fn remove_issue_ref(&mut self, id: &AggregateId) {
        if let Some(idx) = self.linked_issues.iter().position(|linked| linked == id) {
            self.linked_issues.remove(idx);
        }
    }
}

impl Aggregate for PullRequest {
    const AGGREGATE_TYPE: &'static str = "github.pull_request";

    type Event = Event;
    type Error = ProjectionError;

    fn apply(mut self, event: &Event) -> Result<Self, ProjectionError> {
        let Some(kind) = PullRequestEventType::from_event_type(event.event_type()) else {
            return Err(ProjectionError::UnsupportedEventType {
                aggregate_type: Self::AGGREGATE_TYPE,
                aggregate_id: event.aggregate_id().clone(),
                event_type: event.event_type().clone(),
            });
        };

        match kind {
            PullRequestEventType::Opened => {
                expect_marker(kind, event)?;
                self.advance(PullRequestStatus::Open);
            }
            PullRequestEventType::Merged => {
                expect_marker(kind, event)?;
                self.advance(PullRequestStatus::Merged);
            }
            PullRequestEventType::IssueLinked => {
                let issue = expect_reference(kind, event)?;
                self.add_issue_ref(issue);
            }
            PullRequestEventType::IssueUnlinked => {
                let issue = expect_reference(kind, event)?;
                self.remove_issue_ref(issue);
            }
        }

        Ok(self)
    }
}

fn malformed(kind: PullRequestEventType, event: &Event) -> ProjectionError {
    ProjectionError::MalformedEvent {
        aggregate_id: event.aggregate_id().clone(),
        event_type: event.event_type().clone(),
        expected: kind.expected_payload(),
        found: event.payload().kind(),
    }
}

fn expect_marker(kind: PullRequestEventType, event: &Event) -> Result<(), ProjectionError> {
    match event.payload() {
        EventPayload::Empty => Ok(()),
        EventPayload::Linked { .. } => Err(malformed(kind, event)),
    }
}

fn expect_reference(
    kind: PullRequestEventType,
    event: &Event,
) -> Result<&AggregateId, ProjectionError> {
    match event.payload() {
        EventPayload::Linked { reference } => Ok(reference),
        EventPayload::Empty => Err(malformed(kind, event)),
    }
}
