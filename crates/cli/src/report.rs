//! Report rendering.
//!
//! Text: a debug dump of the projected pull request, then one line per
//! merged event (`[<aggregate id>] <event type>@<RFC3339 UTC>`).
//! JSON: the whole timeline as one document.

use std::io::{self, Write};

use chrono::SecondsFormat;
use clap::ValueEnum;

use panoptes_correlation::Timeline;
use panoptes_events::Event;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aggregate dump followed by one line per event
    #[default]
    Text,
    /// Timeline as JSON
    Json,
}

pub fn render(timeline: &Timeline, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(timeline, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, timeline)?;
            writeln!(out)
        }
    }
}

fn render_text(timeline: &Timeline, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "PR:")?;
    writeln!(out)?;
    writeln!(out, "{:#?}", timeline.aggregate())?;
    writeln!(out)?;

    for event in timeline.events() {
        writeln!(out, "{}", event_line(event))?;
    }
    Ok(())
}

/// One timeline line, e.g. `[1234] github.pull_request_opened@2025-01-01T12:00:00Z`.
pub fn event_line(event: &Event) -> String {
    format!(
        "[{}] {}@{}",
        event.aggregate_id(),
        event.event_type(),
        event.occurred_at().to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use panoptes_events::{EventPayload, EventType};

    const OPENED: EventType = EventType::from_static("github.pull_request_opened");

    #[test]
    fn whole_seconds_render_without_fraction() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let event = Event::new("1", OPENED, at, EventPayload::Empty);
        assert_eq!(event_line(&event), "[1] github.pull_request_opened@2025-01-01T12:00:00Z");
    }

    #[test]
    fn sub_second_instants_stay_distinct() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let first = Event::new("1", OPENED, at + Duration::milliseconds(100), EventPayload::Empty);
        let second = Event::new("1", OPENED, at + Duration::milliseconds(900), EventPayload::Empty);

        assert_eq!(event_line(&first), "[1] github.pull_request_opened@2025-01-01T12:00:00.100Z");
        assert_eq!(event_line(&second), "[1] github.pull_request_opened@2025-01-01T12:00:00.900Z");
    }
}
