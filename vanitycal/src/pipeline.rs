//! Per-event orchestration of the expanders and labelers.

use jiff::civil::Date;
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::event::{AnchorDate, AnchorEvent, AnniversaryPattern, Clock, Occurrence};
use crate::expand;
use crate::label::{countdown_label, duration_label, Label};

/// Expand every event, in input order, into its labeled occurrences.
///
/// Each event is a single independent pass. The first event whose arithmetic
/// fails aborts the run, so callers never see partial output.
pub fn expand_events<'a>(
    events: &'a [AnchorEvent],
    pattern: &AnniversaryPattern,
    clock: &Clock,
) -> Result<Vec<Occurrence<'a>>, CalendarError> {
    let mut out = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let before = out.len();
        expand_event(event, index, pattern, clock, &mut out)?;
        debug!(
            event = index,
            title = event.title(),
            occurrences = out.len() - before,
            "expanded event"
        );
    }
    Ok(out)
}

/// Expand one event, appending to `out`.
pub fn expand_event<'a>(
    event: &'a AnchorEvent,
    event_index: usize,
    pattern: &AnniversaryPattern,
    clock: &Clock,
    out: &mut Vec<Occurrence<'a>>,
) -> Result<(), CalendarError> {
    let mut push = |date: Date, label: Option<Label>| {
        trace!(event = event_index, %date, ?label, "occurrence");
        out.push(Occurrence {
            date,
            label,
            event,
            event_index,
        });
    };

    let anchor = match event.date() {
        AnchorDate::MonthDay { month, day } => {
            for date in expand::recurring(month, day, clock)? {
                push(date, None);
            }
            return Ok(());
        }
        AnchorDate::Full(date) => date,
    };

    let run_anniversaries = !event.suppress_past();
    let run_countdown = clock.is_future(anchor) && !event.suppress_future();

    if run_countdown {
        for date in expand::countdowns(anchor, pattern, clock) {
            push(date, Some(countdown_label(date, anchor)));
        }
        // A countdown always ends on its D-Day.
        if !(run_anniversaries && pattern.includes_d_day()) {
            push(anchor, Some(Label::DDay));
        }
    }

    if run_anniversaries {
        for date in expand::anniversaries(anchor, pattern)? {
            if event.suppress_future() && clock.is_future(date) {
                continue;
            }
            push(date, Some(duration_label(anchor, date)));
        }
    }

    Ok(())
}
