use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Zoned;

use crate::error::CalendarError;
use crate::label::Label;

/// The date an event is defined around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorDate {
    /// A full calendar date (anniversaries and countdowns).
    Full(Date),
    /// Month and day only, repeating every year.
    MonthDay { month: i8, day: i8 },
}

impl AnchorDate {
    /// Parse a `YYYY-MM-DD` token.
    ///
    /// Only the canonical form is accepted. jiff alone would also take
    /// datetimes and signed six-digit years.
    pub fn parse_date(input: &str) -> Result<Self, CalendarError> {
        let s = input.trim();
        s.parse::<Date>()
            .ok()
            .filter(|d| d.to_string() == s)
            .map(AnchorDate::Full)
            .ok_or_else(|| CalendarError::invalid_date(input))
    }

    /// Parse an `MM-DD` token. February 29th is accepted.
    pub fn parse_month_day(input: &str) -> Result<Self, CalendarError> {
        let s = input.trim();
        // 2000 is a leap year, so this admits 02-29 and nothing impossible.
        format!("2000-{s}")
            .parse::<Date>()
            .ok()
            .filter(|d| d.strftime("%m-%d").to_string() == s)
            .map(|d| AnchorDate::MonthDay {
                month: d.month(),
                day: d.day(),
            })
            .ok_or_else(|| CalendarError::invalid_month_day(input))
    }
}

/// A user-declared reference date with its presentation and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorEvent {
    title: String,
    description: Option<String>,
    date: AnchorDate,
    suppress_past: bool,
    suppress_future: bool,
}

impl AnchorEvent {
    /// Create an event. The title must not be blank.
    pub fn new(title: impl Into<String>, date: AnchorDate) -> Result<Self, CalendarError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CalendarError::config("title is required"));
        }
        Ok(Self {
            title,
            description: None,
            date,
            suppress_past: false,
            suppress_future: false,
        })
    }

    /// Attach a description. Empty strings are treated as absent.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Skip the anniversary pass: a future event only counts down.
    pub fn with_suppress_past(mut self, suppress: bool) -> Self {
        self.suppress_past = suppress;
        self
    }

    /// Skip the countdown pass and drop anniversaries that have not happened yet.
    pub fn with_suppress_future(mut self, suppress: bool) -> Self {
        self.suppress_future = suppress;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date(&self) -> AnchorDate {
        self.date
    }

    pub fn suppress_past(&self) -> bool {
        self.suppress_past
    }

    pub fn suppress_future(&self) -> bool {
        self.suppress_future
    }
}

/// Offsets applied to every full-date anchor.
///
/// Order within each list is preserved in the output, and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnniversaryPattern {
    pub days: Vec<u32>,
    pub months: Vec<u32>,
    pub years: Vec<u32>,
}

impl AnniversaryPattern {
    pub const DEFAULT_DAYS: &'static [u32] = &[0, 7, 100, 1000, 10000];
    pub const DEFAULT_MONTHS: &'static [u32] = &[1, 2, 3, 6, 9];
    pub const DEFAULT_YEARS: &'static [u32] =
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 25, 30, 35, 40, 45, 50];

    pub fn new(days: Vec<u32>, months: Vec<u32>, years: Vec<u32>) -> Self {
        Self {
            days,
            months,
            years,
        }
    }

    /// Replace each empty list with its default, independently.
    pub fn or_defaults(mut self) -> Self {
        if self.days.is_empty() {
            self.days = Self::DEFAULT_DAYS.to_vec();
        }
        if self.months.is_empty() {
            self.months = Self::DEFAULT_MONTHS.to_vec();
        }
        if self.years.is_empty() {
            self.years = Self::DEFAULT_YEARS.to_vec();
        }
        self
    }

    /// Whether the pattern emits the anchor itself.
    pub fn includes_d_day(&self) -> bool {
        self.days.contains(&0)
    }
}

impl Default for AnniversaryPattern {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new()).or_defaults()
    }
}

/// The single "now" for a run.
///
/// Sampled once and passed around so every past/future decision in a run
/// agrees, even if the wall clock moves on while it executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    now: Zoned,
}

impl Clock {
    /// Sample the system clock in the system time zone.
    pub fn system() -> Self {
        Self { now: Zoned::now() }
    }

    pub fn at(now: Zoned) -> Self {
        Self { now }
    }

    /// A clock pinned to midnight UTC on `date`.
    pub fn on_date(date: Date) -> Result<Self, CalendarError> {
        let now = date
            .to_zoned(TimeZone::UTC)
            .map_err(|e| CalendarError::out_of_range(format!("{date}: {e}")))?;
        Ok(Self { now })
    }

    pub fn now(&self) -> &Zoned {
        &self.now
    }

    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// Strictly after today; an event dated today is not in the future.
    pub fn is_future(&self, date: Date) -> bool {
        date > self.today()
    }
}

/// One generated calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub date: Date,
    /// `None` for recurring events, which show only their title.
    pub label: Option<Label>,
    pub event: &'a AnchorEvent,
    /// Position of the parent event in the input.
    pub event_index: usize,
}

impl Occurrence<'_> {
    pub fn title(&self) -> &str {
        self.event.title()
    }

    pub fn description(&self) -> Option<&str> {
        self.event.description()
    }

    /// `"{title} - {label}"`, or just the title when there is no label.
    pub fn summary(&self) -> String {
        match &self.label {
            Some(label) => format!("{} - {label}", self.title()),
            None => self.title().to_string(),
        }
    }
}
