use jiff::civil::Date;

use crate::calendar::{add_days, add_months, add_years, shift};
use crate::error::CalendarError;
use crate::event::{AnniversaryPattern, Clock};

/// Every date reached by moving `anchor` forward by each offset in `pattern`.
///
/// Days come first (0 yields the anchor itself), then months, then years,
/// each in pattern order. Nothing is filtered.
pub fn anniversaries(anchor: Date, pattern: &AnniversaryPattern) -> Result<Vec<Date>, CalendarError> {
    let mut out = Vec::with_capacity(pattern.days.len() + pattern.months.len() + pattern.years.len());
    for &d in &pattern.days {
        out.push(if d == 0 {
            anchor
        } else {
            add_days(anchor, i64::from(d))?
        });
    }
    for &m in &pattern.months {
        out.push(add_months(anchor, i64::from(m))?);
    }
    for &y in &pattern.years {
        out.push(add_years(anchor, i64::from(y))?);
    }
    Ok(out)
}

/// Dates counting down to a future `anchor`, in pattern order.
///
/// Each offset is subtracted from the anchor; results on or before today are
/// dropped, and so are offsets that would leave the supported date range.
/// The zero day offset has no countdown step.
pub fn countdowns(anchor: Date, pattern: &AnniversaryPattern, clock: &Clock) -> Vec<Date> {
    let days = pattern
        .days
        .iter()
        .filter(|&&d| d != 0)
        .map(|&d| add_days(anchor, -i64::from(d)));
    let months = pattern.months.iter().map(|&m| add_months(anchor, -i64::from(m)));
    let years = pattern.years.iter().map(|&y| add_years(anchor, -i64::from(y)));

    days.chain(months)
        .chain(years)
        .filter_map(Result::ok)
        .filter(|&candidate| clock.is_future(candidate))
        .collect()
}

/// Last year's, this year's and next year's instance of a month-day event.
///
/// February 29th rolls over to March 1st in common years.
pub fn recurring(month: i8, day: i8, clock: &Clock) -> Result<[Date; 3], CalendarError> {
    let year = clock.today().year();
    let on = |y: i16| -> Result<Date, CalendarError> {
        let first = Date::new(y, month, 1)
            .map_err(|e| CalendarError::out_of_range(format!("{y}-{month:02}: {e}")))?;
        shift(first, 0, 0, i64::from(day) - 1)
    };
    Ok([on(year - 1)?, on(year)?, on(year + 1)?])
}
