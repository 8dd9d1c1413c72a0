use rayon::prelude::*;

use panoptes_core::AggregateId;
use panoptes_events::EventStream;
use panoptes_github::PullRequest;

use crate::error::CorrelationError;
use crate::references::{ReferenceSource, extract_cross_references};
use crate::timeline::Timeline;

/// Correlate `target` using the projected pull request's links.
pub fn correlate(
    primary: &EventStream,
    target: &AggregateId,
    secondary: &EventStream,
) -> Result<Timeline, CorrelationError> {
    correlate_with(primary, target, secondary, ReferenceSource::Projected)
}

/// Correlate one target aggregate across two sources.
///
/// 1. Select the target's events from `primary`.
/// 2. Project them into a `PullRequest`.
/// 3. Collect references (`source` decides: projected links or raw payloads).
/// 4. Select the referenced aggregates' events from `secondary`.
/// 5. Concatenate primary then secondary and stable-sort by `occurred_at`.
///
/// On equal timestamps primary events come before secondary ones and each
/// side keeps its own order. The timeline holds exactly the selected events
/// of both sides. A target with no events is not an error: the timeline is
/// empty and the aggregate is at its default state.
pub fn correlate_with(
    primary: &EventStream,
    target: &AggregateId,
    secondary: &EventStream,
    source: ReferenceSource,
) -> Result<Timeline, CorrelationError> {
    let span = tracing::info_span!("correlate", target = %target, refs = ?source);
    let _guard = span.enter();

    let for_target = primary.find_by_aggregate_id(target);
    if for_target.is_empty() {
        tracing::debug!("no primary events for target");
    }

    let aggregate =
        PullRequest::from_stream(&for_target).map_err(|err| CorrelationError::Projection {
            target: target.clone(),
            source: err,
        })?;

    let references: Vec<AggregateId> = match source {
        ReferenceSource::Projected => aggregate.linked_issues().to_vec(),
        ReferenceSource::Raw => extract_cross_references(&for_target)
            .into_iter()
            .cloned()
            .collect(),
    };

    let related = secondary.find_by_aggregate_ids(&references);
    let events = for_target.concat(&related).sorted_by_occurrence();

    tracing::info!(
        primary = for_target.len(),
        secondary = related.len(),
        references = references.len(),
        "correlated timeline"
    );

    Ok(Timeline {
        target: target.clone(),
        aggregate,
        references,
        primary_count: for_target.len(),
        secondary_count: related.len(),
        events,
    })
}

/// Correlate several targets against the same pair of streams.
///
/// Each target gets its own aggregate, so targets are projected in parallel.
/// Timelines come back in the order of `targets`. Any fatal projection error
/// fails the whole batch.
pub fn correlate_many(
    primary: &EventStream,
    targets: &[AggregateId],
    secondary: &EventStream,
) -> Result<Vec<Timeline>, CorrelationError> {
    targets
        .par_iter()
        .map(|target| correlate(primary, target, secondary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use panoptes_events::{Event, EventPayload, EventType};
    use panoptes_github::{ISSUE_LINKED, ISSUE_UNLINKED, PULL_REQUEST_OPENED};
    use proptest::prelude::*;

    const CREATED: EventType = EventType::from_static("jira.issue_created");

    fn at(hours: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::hours(hours)
    }

    fn ids(stream: &EventStream) -> Vec<&str> {
        stream.iter().map(|e| e.aggregate_id().as_str()).collect()
    }

    #[test]
    fn ties_put_primary_before_secondary() {
        let primary = EventStream::from(vec![
            Event::new("1", PULL_REQUEST_OPENED, at(5), EventPayload::Empty),
            Event::new("1", ISSUE_LINKED, at(5), EventPayload::linked("A")),
        ]);
        let secondary = EventStream::from(vec![
            Event::new("A", CREATED, at(5), EventPayload::Empty),
            Event::new("A", CREATED, at(1), EventPayload::Empty),
        ]);

        let timeline = correlate(&primary, &AggregateId::new("1"), &secondary).unwrap();

        let events = timeline.events();
        assert_eq!(ids(events), vec!["A", "1", "1", "A"]);
        assert_eq!(events.as_slice()[1].event_type(), &PULL_REQUEST_OPENED);
        assert_eq!(events.as_slice()[2].event_type(), &ISSUE_LINKED);
    }

    #[test]
    fn raw_references_include_unlinked_issues() {
        let primary = EventStream::from(vec![
            Event::new("1", ISSUE_LINKED, at(1), EventPayload::linked("A")),
            Event::new("1", ISSUE_UNLINKED, at(2), EventPayload::linked("A")),
        ]);
        let secondary = EventStream::from(vec![Event::new("A", CREATED, at(3), EventPayload::Empty)]);
        let target = AggregateId::new("1");

        let projected = correlate(&primary, &target, &secondary).unwrap();
        assert!(projected.references().is_empty());
        assert_eq!(projected.secondary_count(), 0);

        let raw = correlate_with(&primary, &target, &secondary, ReferenceSource::Raw).unwrap();
        assert_eq!(raw.references().len(), 2);
        assert_eq!(raw.secondary_count(), 1);
        assert_eq!(raw.events().len(), 3);
    }

    #[test]
    fn batch_keeps_target_order() {
        let primary = EventStream::from(vec![
            Event::new("1", ISSUE_LINKED, at(1), EventPayload::linked("A")),
            Event::new("2", ISSUE_LINKED, at(2), EventPayload::linked("B")),
        ]);
        let secondary = EventStream::from(vec![
            Event::new("B", CREATED, at(3), EventPayload::Empty),
            Event::new("A", CREATED, at(4), EventPayload::Empty),
        ]);
        let targets = vec![AggregateId::new("2"), AggregateId::new("missing"), AggregateId::new("1")];

        let timelines = correlate_many(&primary, &targets, &secondary).unwrap();

        let got: Vec<Vec<&str>> = timelines.iter().map(|t| ids(t.events())).collect();
        assert_eq!(got, vec![vec!["2", "B"], vec![], vec!["1", "A"]]);
    }

    #[test]
    fn batch_fails_on_any_malformed_target() {
        let primary = EventStream::from(vec![
            Event::new("1", PULL_REQUEST_OPENED, at(1), EventPayload::Empty),
            Event::new("2", ISSUE_LINKED, at(2), EventPayload::Empty),
        ]);
        let targets = vec![AggregateId::new("1"), AggregateId::new("2")];

        let err = correlate_many(&primary, &targets, &EventStream::new()).unwrap_err();

        let CorrelationError::Projection { target, .. } = err;
        assert_eq!(target, "2");
    }

    fn arb_side(ids: &'static [&'static str]) -> impl Strategy<Value = Vec<(usize, i64)>> {
        prop::collection::vec((0..ids.len(), 0i64..10), 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: |merged| == |primary side| + |secondary side|, and the
        /// merge is non-decreasing in time.
        #[test]
        fn merge_preserves_length_and_order(
            primary_side in arb_side(&["1", "2"]),
            secondary_side in arb_side(&["A", "B", "C"]),
        ) {
            let mut primary = EventStream::new();
            primary.push(Event::new("1", ISSUE_LINKED, at(0), EventPayload::linked("A")));
            primary.push(Event::new("1", ISSUE_LINKED, at(0), EventPayload::linked("B")));
            for (id, hours) in primary_side {
                primary.push(Event::new(["1", "2"][id], PULL_REQUEST_OPENED, at(hours), EventPayload::Empty));
            }
            let secondary: EventStream = secondary_side
                .into_iter()
                .map(|(id, hours)| Event::new(["A", "B", "C"][id], CREATED, at(hours), EventPayload::Empty))
                .collect();
            let target = AggregateId::new("1");

            let timeline = correlate(&primary, &target, &secondary).unwrap();

            let expected_primary = primary.find_by_aggregate_id(&target).len();
            let expected_secondary = secondary
                .find_by_aggregate_ids(&[AggregateId::new("A"), AggregateId::new("B")])
                .len();
            prop_assert_eq!(timeline.events().len(), expected_primary + expected_secondary);
            prop_assert_eq!(timeline.primary_count(), expected_primary);
            prop_assert_eq!(timeline.secondary_count(), expected_secondary);
            for pair in timeline.events().as_slice().windows(2) {
                prop_assert!(pair[0].occurred_at() <= pair[1].occurred_at());
            }
        }
    }
}
