use thiserror::Error;

use panoptes_core::AggregateId;
use panoptes_events::ProjectionError;

/// Fatal correlation failure. No partial timeline accompanies it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("projecting `{target}` failed: {source}")]
    Projection {
        target: AggregateId,
        #[source]
        source: ProjectionError,
    },
}
