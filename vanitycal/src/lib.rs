//! vanitycal — anniversaries, countdowns and yearly reminders from a handful
//! of reference dates.
//!
//! Each full-date event is expanded by a pattern of day, month and year
//! offsets into labeled occurrences (`7d`, `1y 3m`, `D-100`, ...). Month-day
//! events repeat around the current year without a label.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::date;
//! use vanitycal::{AnchorDate, AnchorEvent, AnniversaryPattern, Calendar, Clock};
//!
//! let event = AnchorEvent::new("First day", AnchorDate::Full(date(2023, 1, 1))).unwrap();
//! let calendar = Calendar::new(vec![event])
//!     .with_pattern(AnniversaryPattern::new(vec![0, 100], vec![6], vec![1]));
//! let clock = Clock::on_date(date(2026, 1, 1)).unwrap();
//!
//! let summaries: Vec<String> = calendar
//!     .occurrences(&clock)
//!     .unwrap()
//!     .iter()
//!     .map(|o| o.summary())
//!     .collect();
//! assert_eq!(
//!     summaries,
//!     ["First day - D-DAY", "First day - 100d", "First day - 6m", "First day - 1y"]
//! );
//! ```

pub mod calendar;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod event;
pub mod expand;
pub mod ics;
pub mod label;
pub mod pipeline;

pub use error::CalendarError;
pub use event::{AnchorDate, AnchorEvent, AnniversaryPattern, Clock, Occurrence};
pub use label::{countdown_label, duration_label, Label};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A validated set of events plus the settings used to expand and publish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    name: String,
    timezone: String,
    pattern: AnniversaryPattern,
    events: Vec<AnchorEvent>,
}

impl Calendar {
    pub const DEFAULT_TIMEZONE: &'static str = "Europe/Paris";
    pub const DEFAULT_NAME: &'static str = "VanityCal 💚";

    /// Create a calendar with the default name, time zone and pattern.
    pub fn new(events: Vec<AnchorEvent>) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            timezone: Self::DEFAULT_TIMEZONE.to_string(),
            pattern: AnniversaryPattern::default(),
            events,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the time zone identifier tagged on the output. It is not used for
    /// any date arithmetic.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_pattern(mut self, pattern: AnniversaryPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn pattern(&self) -> &AnniversaryPattern {
        &self.pattern
    }

    pub fn events(&self) -> &[AnchorEvent] {
        &self.events
    }

    /// Expand every event into its occurrences, in input order.
    pub fn occurrences(&self, clock: &Clock) -> Result<Vec<Occurrence<'_>>, CalendarError> {
        pipeline::expand_events(&self.events, &self.pattern, clock)
    }

    /// Expand and render as an iCalendar document.
    pub fn to_ics(&self, clock: &Clock) -> Result<String, CalendarError> {
        let occurrences = self.occurrences(clock)?;
        Ok(ics::to_ics(self, &occurrences, clock))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Occurrence<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("date", &self.date.to_string())?;
        map.serialize_entry("label", &self.label.map(|l| l.to_string()))?;
        map.serialize_entry("title", self.title())?;
        map.serialize_entry("description", &self.description())?;
        map.serialize_entry("event", &self.event_index)?;
        map.end()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn occurrence_json_shape() {
        let event = AnchorEvent::new("Start", AnchorDate::Full(date(2023, 1, 1)))
            .unwrap()
            .with_description("first");
        let calendar = Calendar::new(vec![event])
            .with_pattern(AnniversaryPattern::new(vec![7], vec![], vec![]));
        let clock = Clock::on_date(date(2024, 1, 1)).unwrap();
        let occ = calendar.occurrences(&clock).unwrap();
        let json = serde_json::to_value(&occ).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "date": "2023-01-08",
                "label": "7d",
                "title": "Start",
                "description": "first",
                "event": 0
            }])
        );
    }
}
