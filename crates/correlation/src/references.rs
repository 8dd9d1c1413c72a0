use core::str::FromStr;

use panoptes_core::{AggregateId, DomainError};
use panoptes_events::EventStream;

/// Where `correlate` takes the cross-references from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    /// The projected aggregate's current links (unlinks honoured, deduplicated).
    #[default]
    Projected,
    /// Every reference carried by any event, as extracted by
    /// [`extract_cross_references`].
    Raw,
}

impl FromStr for ReferenceSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projected" => Ok(Self::Projected),
            "raw" => Ok(Self::Raw),
            other => Err(DomainError::validation(format!(
                "unknown reference source `{other}` (expected `projected` or `raw`)"
            ))),
        }
    }
}

/// Every foreign reference carried by the stream's payloads, first-seen order.
///
/// Duplicates are kept: a reference carried by two events appears twice.
/// Unlink events carry references too, so they are included.
pub fn extract_cross_references(stream: &EventStream) -> Vec<&AggregateId> {
    stream
        .iter()
        .filter_map(|event| event.payload().cross_reference())
        .collect()
}
