//! TOML configuration: raw document model, defaults and validation.

use serde::Deserialize;

use crate::error::CalendarError;
use crate::event::{AnchorDate, AnchorEvent, AnniversaryPattern};
use crate::Calendar;

/// Top-level configuration document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Time zone identifier tagged on the generated calendar.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Display name of the generated calendar.
    #[serde(default)]
    pub calendar_name: Option<String>,

    /// Offsets applied to every full-date event.
    #[serde(default)]
    pub anniversaries: AnniversaryToml,

    #[serde(default)]
    pub events: Vec<EventToml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnniversaryToml {
    #[serde(default)]
    pub years: Vec<u32>,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub days: Vec<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventToml {
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD`, for anniversaries and countdowns.
    pub date: Option<String>,
    /// `MM-DD`, for events repeating every year.
    pub month_day: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub suppress_past: bool,
    #[serde(default)]
    pub suppress_future: bool,
}

impl CalendarConfig {
    /// Parse a TOML document. Structural checks happen in [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self, CalendarError> {
        toml::from_str(input).map_err(|e| CalendarError::config(format!("invalid TOML: {e}")))
    }

    /// Check every event and build a [`Calendar`] with defaults applied.
    ///
    /// Fails on the first problem found; events are numbered from 1.
    pub fn validate(&self) -> Result<Calendar, CalendarError> {
        if self.events.is_empty() {
            return Err(CalendarError::config("no events found in configuration"));
        }

        let events = self
            .events
            .iter()
            .enumerate()
            .map(|(i, ev)| ev.to_event().map_err(|e| e.for_event(i + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        let pattern = AnniversaryPattern::new(
            self.anniversaries.days.clone(),
            self.anniversaries.months.clone(),
            self.anniversaries.years.clone(),
        )
        .or_defaults();

        let mut calendar = Calendar::new(events).with_pattern(pattern);
        if let Some(tz) = non_empty(&self.timezone) {
            calendar = calendar.with_timezone(tz);
        }
        if let Some(name) = non_empty(&self.calendar_name) {
            calendar = calendar.with_name(name);
        }
        Ok(calendar)
    }
}

impl EventToml {
    fn to_event(&self) -> Result<AnchorEvent, CalendarError> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::config("title is required"));
        }
        let date = match (non_empty(&self.date), non_empty(&self.month_day)) {
            (Some(_), Some(_)) => {
                return Err(CalendarError::config("cannot specify both date and month_day"))
            }
            (None, None) => {
                return Err(CalendarError::config("either date or month_day is required"))
            }
            (Some(date), None) => AnchorDate::parse_date(date)?,
            (None, Some(month_day)) => AnchorDate::parse_month_day(month_day)?,
        };

        let mut event = AnchorEvent::new(self.title.clone(), date)?
            .with_suppress_past(self.suppress_past)
            .with_suppress_future(self.suppress_future);
        if let Some(description) = non_empty(&self.description) {
            event = event.with_description(description);
        }
        Ok(event)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
