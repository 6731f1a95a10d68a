//! Compact elapsed/remaining-time labels.
//!
//! Precedence matters: an interval that is both an exact calendar unit and a
//! milestone day count gets a different label depending on which check runs
//! first, and the two label functions order them differently.

use std::fmt;

use jiff::civil::Date;

use crate::calendar::{add_months, add_years, days_between, days_in_previous_month};

/// Day counts that always win over decomposition for anniversaries.
const ELAPSED_MILESTONES: &[i64] = &[7, 100, 1000, 10000];

/// Day counts that win over every other form for countdowns.
const COUNTDOWN_MILESTONES: &[i64] = &[1, 2, 3, 5, 7, 10, 30, 60, 90, 100, 365, 1000];

/// A rendered interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The anchor date itself.
    DDay,
    /// Time since the anchor, e.g. `1y 3m`.
    Elapsed(Elapsed),
    /// Time remaining until the anchor, e.g. `D-7`.
    Countdown(Countdown),
}

/// Years, months and days since an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl Elapsed {
    pub fn years(years: i64) -> Self {
        Self::new(years, 0, 0)
    }

    pub fn months(months: i64) -> Self {
        Self::new(0, months, 0)
    }

    pub fn days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    pub fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Split a month count into whole years and leftover months.
    fn from_month_count(months: i64) -> Self {
        Self::new(months / 12, months % 12, 0)
    }
}

/// Time left before an anchor, in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Days(i64),
    Months(i64),
    Years(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::DDay => write!(f, "D-DAY"),
            Label::Elapsed(e) => write!(f, "{e}"),
            Label::Countdown(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Elapsed {
            years: y,
            months: m,
            days: d,
        } = *self;
        if y > 0 && m == 0 && d == 0 {
            write!(f, "{y}y")
        } else if y > 0 && m > 0 && d == 0 {
            write!(f, "{y}y {m}m")
        } else if y > 0 && d > 0 && m == 0 {
            write!(f, "{y}y {d}d")
        } else if m > 0 && d == 0 {
            write!(f, "{m}m")
        } else if m > 0 && d > 0 && y == 0 {
            write!(f, "{m}m {d}d")
        } else if y == 0 && m == 0 && d > 0 {
            write!(f, "{d}d")
        } else {
            write!(f, "{y}y {m}m {d}d")
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Days(n) => write!(f, "D-{n}"),
            Countdown::Months(n) => write!(f, "D-{n}m"),
            Countdown::Years(n) => write!(f, "D-{n}y"),
        }
    }
}

/// An exact calendar-unit distance between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExactUnit {
    Years(i64),
    Months(i64),
}

/// Find a whole number of years, or failing that months, that takes `start`
/// exactly to `end` through the rollover arithmetic.
fn exact_unit(start: Date, end: Date) -> Option<ExactUnit> {
    let years = i64::from(end.year()) - i64::from(start.year());
    if years > 0 {
        let landed = add_years(start, years).ok();
        if landed == Some(end) {
            return Some(ExactUnit::Years(years));
        }
        // Feb 29 plus a year lands on Mar 1 in common years; Feb 28 still counts.
        let leap_day_start = start.month() == 2 && start.day() == 29;
        let feb_28_end = end.month() == 2 && end.day() == 28;
        let rolled_to_march = landed.is_some_and(|d| d.month() == 3 && d.day() == 1);
        if leap_day_start && feb_28_end && rolled_to_march {
            return Some(ExactUnit::Years(years));
        }
    }

    (1..=years.max(0) * 12 + 12)
        .find(|&m| add_months(start, m).ok() == Some(end))
        .map(ExactUnit::Months)
}

/// Field-wise year/month/day difference with borrowing.
fn decompose(start: Date, end: Date) -> Elapsed {
    let mut years = i64::from(end.year()) - i64::from(start.year());
    let mut months = i64::from(end.month()) - i64::from(start.month());
    let mut days = i64::from(end.day()) - i64::from(start.day());

    if months < 0 {
        years -= 1;
        months += 12;
    }
    if days < 0 {
        months -= 1;
        if months < 0 {
            years -= 1;
            months += 12;
        }
        days += i64::from(days_in_previous_month(end));
    }
    Elapsed::new(years, months, days)
}

/// Label the time elapsed from `start` to `end` (`end` on or after `start`).
///
/// Precedence: same day, exact years, exact months, milestone day counts,
/// then a year/month/day decomposition.
pub fn duration_label(start: Date, end: Date) -> Label {
    if start == end {
        return Label::DDay;
    }

    match exact_unit(start, end) {
        Some(ExactUnit::Years(y)) => return Label::Elapsed(Elapsed::years(y)),
        Some(ExactUnit::Months(m)) => return Label::Elapsed(Elapsed::from_month_count(m)),
        None => {}
    }

    let total_days = days_between(start, end);
    if ELAPSED_MILESTONES.contains(&total_days) {
        return Label::Elapsed(Elapsed::days(total_days));
    }

    Label::Elapsed(decompose(start, end))
}

/// Label the time remaining from `from` until the anchor `to`.
///
/// Precedence: milestone day counts first, then exact years or months, then a
/// coarse single-unit approximation.
pub fn countdown_label(from: Date, to: Date) -> Label {
    if from >= to {
        return Label::DDay;
    }

    let total_days = days_between(from, to);
    if COUNTDOWN_MILESTONES.contains(&total_days) {
        return Label::Countdown(Countdown::Days(total_days));
    }

    match exact_unit(from, to) {
        Some(ExactUnit::Years(y)) => return Label::Countdown(Countdown::Years(y)),
        Some(ExactUnit::Months(m)) if m % 12 == 0 => {
            return Label::Countdown(Countdown::Years(m / 12))
        }
        Some(ExactUnit::Months(m)) => return Label::Countdown(Countdown::Months(m)),
        None => {}
    }

    let parts = decompose(from, to);
    let total_months = parts.years * 12 + parts.months;
    let countdown = if total_days < 30 {
        Countdown::Days(total_days)
    } else if (1..12).contains(&total_months) {
        Countdown::Months(total_months)
    } else if total_months >= 12 {
        Countdown::Years(total_months / 12)
    } else {
        Countdown::Days(total_days)
    };
    Label::Countdown(countdown)
}
