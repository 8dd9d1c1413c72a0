use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, TimeZone, Utc};
use panoptes_core::AggregateId;
use panoptes_correlation::{correlate, correlate_many};
use panoptes_events::{Event, EventPayload, EventStream};
use panoptes_github::{ISSUE_LINKED, PULL_REQUEST_MERGED, PULL_REQUEST_OPENED};

/// `prs` pull requests, each linked to one issue with `per_issue` Jira events.
fn synthetic_streams(prs: usize, per_issue: usize) -> (EventStream, EventStream) {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut github = EventStream::new();
    let mut jira = EventStream::new();

    for n in 0..prs {
        let pr = n.to_string();
        let issue = format!("TEST-{n}");
        let base = start + Duration::minutes(n as i64);

        github.push(Event::new(pr.as_str(), PULL_REQUEST_OPENED, base, EventPayload::Empty));
        github.push(Event::new(
            pr.as_str(),
            ISSUE_LINKED,
            base + Duration::hours(1),
            EventPayload::linked(issue.as_str()),
        ));
        github.push(Event::new(
            pr.as_str(),
            PULL_REQUEST_MERGED,
            base + Duration::hours(48),
            EventPayload::Empty,
        ));

        for i in 0..per_issue {
            let event_type = if i == 0 {
                panoptes_jira::ISSUE_CREATED
            } else if i + 1 == per_issue {
                panoptes_jira::ISSUE_COMPLETED
            } else {
                panoptes_jira::ISSUE_STATUS_CHANGED
            };
            jira.push(Event::new(
                issue.as_str(),
                event_type,
                base + Duration::hours(i as i64),
                EventPayload::Empty,
            ));
        }
    }

    (github, jira)
}

fn bench_single_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate_single_target");

    for prs in [100usize, 1_000, 10_000] {
        let (github, jira) = synthetic_streams(prs, 5);
        let target = AggregateId::new((prs / 2).to_string());

        group.throughput(Throughput::Elements((github.len() + jira.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(prs), &prs, |b, _| {
            b.iter(|| correlate(black_box(&github), black_box(&target), black_box(&jira)).unwrap())
        });
    }

    group.finish();
}

fn bench_many_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate_many_targets");
    let (github, jira) = synthetic_streams(1_000, 5);

    for targets in [10usize, 100] {
        let ids: Vec<AggregateId> = (0..targets).map(|n| AggregateId::new(n.to_string())).collect();

        group.throughput(Throughput::Elements(targets as u64));
        group.bench_with_input(BenchmarkId::from_parameter(targets), &ids, |b, ids| {
            b.iter(|| correlate_many(black_box(&github), black_box(ids), black_box(&jira)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_target, bench_many_targets);
criterion_main!(benches);
