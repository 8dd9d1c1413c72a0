//! Projection runner (aggregate builder for a single projection call).
//!
//! The runner owns the aggregate it is building. Nothing else can observe it
//! until `run`/`rebuild_from_scratch` hand it back, and a fatal error drops
//! it, so a half-projected aggregate never escapes.

use chrono::{DateTime, Utc};

use panoptes_core::Aggregate;

use crate::envelope::Event;

/// Tracks how far a projection has progressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProjectionCursor {
    applied: u64,
    last_occurred_at: DateTime<Utc>,
}

impl ProjectionCursor {
    /// Number of events folded so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Business time of the last folded event (stream order, not max).
    pub fn last_occurred_at(&self) -> DateTime<Utc> {
        self.last_occurred_at
    }
}

/// Folds events into an exclusively owned aggregate and tracks progress.
#[derive(Debug)]
pub struct ProjectionRunner<A>
where
    A: Aggregate<Event = Event>,
{
    aggregate: A,
    cursor: Option<ProjectionCursor>,
}

impl<A> ProjectionRunner<A>
where
    A: Aggregate<Event = Event>,
{
    pub fn new(aggregate: A) -> Self {
        Self {
            aggregate,
            cursor: None,
        }
    }

    pub fn aggregate(&self) -> &A {
        &self.aggregate
    }

    pub fn into_aggregate(self) -> A {
        self.aggregate
    }

    /// Current cursor (if any events were applied).
    pub fn cursor(&self) -> Option<ProjectionCursor> {
        self.cursor
    }

    /// Apply a single event by functional update.
    pub fn apply(self, event: &Event) -> Result<Self, A::Error> {
        let applied = self.cursor.map(|c| c.applied).unwrap_or(0) + 1;

        let aggregate = self.aggregate.apply(event).inspect_err(|err| {
            tracing::warn!(
                aggregate_type = A::AGGREGATE_TYPE,
                aggregate_id = %event.aggregate_id(),
                event_type = %event.event_type(),
                position = applied,
                error = ?err,
                "projection aborted"
            );
        })?;

        tracing::debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            aggregate_id = %event.aggregate_id(),
            event_type = %event.event_type(),
            position = applied,
            "applied event"
        );

        Ok(Self {
            aggregate,
            cursor: Some(ProjectionCursor {
                applied,
                last_occurred_at: event.occurred_at(),
            }),
        })
    }

    /// Apply many events, left to right, in the order given.
    ///
    /// No sorting happens here; callers wanting chronological semantics sort
    /// the input first.
    pub fn run<'a>(self, events: impl IntoIterator<Item = &'a Event>) -> Result<Self, A::Error> {
        events.into_iter().try_fold(self, |runner, event| runner.apply(event))
    }

    /// Rebuild an aggregate from scratch by replaying the full history.
    ///
    /// The factory is used to create a fresh aggregate instance.
    pub fn rebuild_from_scratch<'a>(
        factory: impl FnOnce() -> A,
        events: impl IntoIterator<Item = &'a Event>,
    ) -> Result<(A, Option<ProjectionCursor>), A::Error> {
        let runner = ProjectionRunner::new(factory()).run(events)?;
        Ok((runner.aggregate, runner.cursor))
    }
}
