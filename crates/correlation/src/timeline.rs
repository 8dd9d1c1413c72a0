use serde::Serialize;

use panoptes_core::AggregateId;
use panoptes_events::EventStream;
use panoptes_github::PullRequest;

/// Output of one correlation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(crate) target: AggregateId,
    pub(crate) aggregate: PullRequest,
    pub(crate) references: Vec<AggregateId>,
    pub(crate) primary_count: usize,
    pub(crate) secondary_count: usize,
    pub(crate) events: EventStream,
}

impl Timeline {
    pub fn target(&self) -> &AggregateId {
        &self.target
    }

    /// The projected pull request.
    pub fn aggregate(&self) -> &PullRequest {
        &self.aggregate
    }

    /// Issue keys the secondary stream was filtered by.
    pub fn references(&self) -> &[AggregateId] {
        &self.references
    }

    /// Number of merged events that came from the primary stream.
    pub fn primary_count(&self) -> usize {
        self.primary_count
    }

    /// Number of merged events that came from the secondary stream.
    pub fn secondary_count(&self) -> usize {
        self.secondary_count
    }

    /// Merged events, ascending by `occurred_at`.
    pub fn events(&self) -> &EventStream {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
