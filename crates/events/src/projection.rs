use panoptes_core::Aggregate;

use crate::envelope::Event;
use crate::runner::ProjectionRunner;
use crate::stream::EventStream;

/// Fold every event of `stream` into `aggregate`, left to right.
///
/// The stream's existing order is used as-is. Folding the same ordered stream
/// from the same initial state always yields the same result. The first
/// failing event aborts the fold and only the error is returned.
pub fn project<A>(aggregate: A, stream: &EventStream) -> Result<A, A::Error>
where
    A: Aggregate<Event = Event>,
{
    ProjectionRunner::new(aggregate)
        .run(stream)
        .map(ProjectionRunner::into_aggregate)
}
