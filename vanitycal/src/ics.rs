//! RFC 5545 serialization of generated occurrences.
//!
//! Every occurrence becomes an all-day `VEVENT`. Lines end in CRLF and are
//! folded at 75 octets.

use crate::event::{Clock, Occurrence};
use crate::Calendar;

const PRODID: &str = "-//vanitycal//vanitycal//EN";
const MAX_LINE_OCTETS: usize = 75;

/// Render a full `VCALENDAR` document.
///
/// `DTSTAMP` and `LAST-MODIFIED` come from `clock`, so the same inputs and
/// clock always produce byte-identical output.
pub fn to_ics(calendar: &Calendar, occurrences: &[Occurrence<'_>], clock: &Clock) -> String {
    let stamp = clock.now().timestamp().strftime("%Y%m%dT%H%M%SZ").to_string();
    let mut w = IcsWriter::default();

    w.line("BEGIN", "VCALENDAR");
    w.line("VERSION", "2.0");
    w.line("PRODID", PRODID);
    w.line("METHOD", "PUBLISH");
    w.text("NAME", calendar.name());
    w.text("X-WR-CALNAME", calendar.name());
    w.text("DESCRIPTION", "");
    w.text("X-WR-CALDESC", "");
    w.text("TIMEZONE-ID", calendar.timezone());
    w.text("X-WR-TIMEZONE", calendar.timezone());
    w.line("CALSCALE", "GREGORIAN");
    w.line("LAST-MODIFIED", &stamp);

    let mut sequence = 0usize;
    let mut previous_event = None;
    for occ in occurrences {
        if previous_event != Some(occ.event_index) {
            previous_event = Some(occ.event_index);
            sequence = 0;
        }
        let day = occ.date.strftime("%Y%m%d").to_string();

        w.line("BEGIN", "VEVENT");
        w.line("UID", &uid(&day, occ.event_index, sequence));
        w.line("DTSTAMP", &stamp);
        w.text("SUMMARY", &occ.summary());
        if let Some(description) = occ.description() {
            w.text("DESCRIPTION", description);
        }
        w.line("DTSTART;VALUE=DATE", &day);
        w.line("END", "VEVENT");

        sequence += 1;
    }

    w.line("END", "VCALENDAR");
    w.finish()
}

/// Stable identifier: the date, the event's position in the input, and the
/// occurrence's position within that event.
fn uid(day: &str, event_index: usize, sequence: usize) -> String {
    format!("vanitycal-{day}-{event_index}-{sequence}")
}

#[derive(Default)]
struct IcsWriter {
    out: String,
}

impl IcsWriter {
    /// Write a property whose value needs no escaping.
    fn line(&mut self, name: &str, value: &str) {
        let content = format!("{name}:{value}");
        self.fold(&content);
    }

    /// Write a TEXT property, escaping its value.
    fn text(&mut self, name: &str, value: &str) {
        self.line(name, &escape_text(value));
    }

    fn fold(&mut self, content: &str) {
        let mut width = 0;
        for ch in content.chars() {
            let len = ch.len_utf8();
            if width + len > MAX_LINE_OCTETS {
                self.out.push_str("\r\n ");
                // The leading space counts toward the limit.
                width = 1;
            }
            self.out.push(ch);
            width += len;
        }
        self.out.push_str("\r\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{AnchorDate, AnchorEvent, AnniversaryPattern};
    use jiff::civil::date;

    fn clock() -> Clock {
        Clock::on_date(date(2026, 10, 18)).unwrap()
    }

    #[test]
    fn anniversary_calendar() {
        let event = AnchorEvent::new("Test Event", AnchorDate::Full(date(2023, 1, 1)))
            .unwrap()
            .with_description("Test Description");
        let calendar = Calendar::new(vec![event])
            .with_name("Test Calendar")
            .with_timezone("UTC")
            .with_pattern(AnniversaryPattern::new(vec![0], vec![1], vec![1]));
        let ics = calendar.to_ics(&clock()).unwrap();

        for needle in [
            "BEGIN:VCALENDAR\r\n",
            "NAME:Test Calendar\r\n",
            "TIMEZONE-ID:UTC\r\n",
            "LAST-MODIFIED:20261018T000000Z\r\n",
            "SUMMARY:Test Event - D-DAY\r\n",
            "SUMMARY:Test Event - 1m\r\n",
            "SUMMARY:Test Event - 1y\r\n",
            "DESCRIPTION:Test Description\r\n",
            "DTSTART;VALUE=DATE:20230101\r\n",
            "DTSTART;VALUE=DATE:20230201\r\n",
            "DTSTART;VALUE=DATE:20240101\r\n",
            "UID:vanitycal-20230101-0-0\r\n",
            "UID:vanitycal-20240101-0-2\r\n",
        ] {
            assert!(ics.contains(needle), "missing {needle:?} in\n{ics}");
        }
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    }

    #[test]
    fn uids_unique_for_duplicate_offsets() {
        let event = AnchorEvent::new("Dup", AnchorDate::Full(date(2023, 1, 1))).unwrap();
        let calendar = Calendar::new(vec![event.clone(), event])
            .with_pattern(AnniversaryPattern::new(vec![7, 7], vec![1], vec![1]));
        let ics = calendar.to_ics(&clock()).unwrap();
        let mut uids: Vec<&str> = ics.lines().filter(|l| l.starts_with("UID:")).collect();
        let total = uids.len();
        uids.sort_unstable();
        uids.dedup();
        assert_eq!(total, 8);
        assert_eq!(uids.len(), total);
    }

    #[test]
    fn escapes_text_values() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn folds_long_lines_on_char_boundaries() {
        let mut w = IcsWriter::default();
        let long = "é".repeat(60);
        w.text("SUMMARY", &long);
        let out = w.finish();
        for line in out.split("\r\n").filter(|l| !l.is_empty()) {
            assert!(line.len() <= MAX_LINE_OCTETS, "{} octets", line.len());
        }
        let unfolded = out.replace("\r\n ", "");
        assert_eq!(unfolded, format!("SUMMARY:{long}\r\n"));
    }
}
