//! Date arithmetic with non-clamping rollover.
//!
//! Adding months or years never clamps the day-of-month to the end of the
//! target month. The overflow spills into the following month instead:
//! `2023-01-31 + 1 month` is `2023-03-03` and `2020-02-29 + 1 year` is
//! `2021-03-01`. The labeler detects exact matches by replaying this same
//! arithmetic, so every caller must go through these functions.

use jiff::civil::Date;
use jiff::Span;

use crate::error::CalendarError;

/// Shift `date` by a number of years, months and days in one step.
///
/// The year and month are folded first, then the (possibly too large)
/// day-of-month is applied as a day offset from the first of the target month.
pub fn shift(date: Date, years: i64, months: i64, days: i64) -> Result<Date, CalendarError> {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month()) - 1;
    let total_months = years
        .checked_mul(12)
        .and_then(|y| total_months.checked_add(y))
        .and_then(|t| t.checked_add(months))
        .ok_or_else(|| CalendarError::out_of_range(format!("{date} shifted by {years}y {months}m")))?;

    let year = i16::try_from(total_months.div_euclid(12))
        .map_err(|_| CalendarError::out_of_range(format!("{date} shifted by {years}y {months}m")))?;
    // rem_euclid(12) is always in 0..12
    let month = (total_months.rem_euclid(12) + 1) as i8;

    let first = Date::new(year, month, 1)
        .map_err(|e| CalendarError::out_of_range(format!("year {year}: {e}")))?;
    let offset = i64::from(date.day()) - 1 + days;
    let span = Span::new()
        .try_days(offset)
        .map_err(|e| CalendarError::out_of_range(format!("{offset} days: {e}")))?;
    first
        .checked_add(span)
        .map_err(|e| CalendarError::out_of_range(format!("{first} + {offset} days: {e}")))
}

pub fn add_days(date: Date, n: i64) -> Result<Date, CalendarError> {
    shift(date, 0, 0, n)
}

pub fn add_months(date: Date, n: i64) -> Result<Date, CalendarError> {
    shift(date, 0, n, 0)
}

pub fn add_years(date: Date, n: i64) -> Result<Date, CalendarError> {
    shift(date, n, 0, 0)
}

/// Whole days from `a` to `b` (negative when `b` is earlier).
pub fn days_between(a: Date, b: Date) -> i64 {
    // A span between two civil dates with days as the largest unit always fits.
    let span = a.until(b).expect("day span between two civil dates");
    i64::from(span.get_days())
}

/// Number of days in the month immediately before `date`'s month.
pub fn days_in_previous_month(date: Date) -> i8 {
    let first = date.first_of_month();
    match first.yesterday() {
        Ok(prev) => prev.days_in_month(),
        // 9999-01-01 has no predecessor; December is always 31 days.
        Err(_) => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn add_days_crosses_months_and_years() {
        assert_eq!(add_days(date(2023, 1, 1), 7).unwrap(), date(2023, 1, 8));
        assert_eq!(add_days(date(2023, 1, 1), 100).unwrap(), date(2023, 4, 11));
        assert_eq!(add_days(date(2022, 12, 31), 1).unwrap(), date(2023, 1, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn month_overflow_rolls_forward() {
        assert_eq!(add_months(date(2023, 1, 31), 1).unwrap(), date(2023, 3, 3));
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 3, 2));
        assert_eq!(add_months(date(2023, 3, 31), 1).unwrap(), date(2023, 5, 1));
        assert_eq!(add_months(date(2023, 8, 31), 6).unwrap(), date(2024, 3, 2));
    }

    #[test]
    fn month_fold_across_years() {
        assert_eq!(add_months(date(2023, 11, 15), 3).unwrap(), date(2024, 2, 15));
        assert_eq!(add_months(date(2023, 1, 15), 24).unwrap(), date(2025, 1, 15));
        assert_eq!(add_months(date(2024, 2, 15), -3).unwrap(), date(2023, 11, 15));
    }

    #[test]
    fn negative_month_overflow_also_rolls_forward() {
        // 2024-03-31 - 1 month = "2024-02-31" = 2024-03-02
        assert_eq!(add_months(date(2024, 3, 31), -1).unwrap(), date(2024, 3, 2));
    }

    #[test]
    fn leap_day_plus_year_is_march_first() {
        assert_eq!(add_years(date(2020, 2, 29), 1).unwrap(), date(2021, 3, 1));
        assert_eq!(add_years(date(2020, 2, 29), 4).unwrap(), date(2024, 2, 29));
        assert_eq!(add_years(date(2020, 2, 29), -1).unwrap(), date(2019, 3, 1));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let err = add_years(date(9990, 1, 1), 50).unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange { .. }));
        assert!(add_days(date(9999, 12, 31), 1).is_err());
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(date(2023, 1, 1), date(2023, 4, 11)), 100);
        assert_eq!(days_between(date(2023, 4, 11), date(2023, 1, 1)), -100);
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
    }

    #[test]
    fn previous_month_length() {
        assert_eq!(days_in_previous_month(date(2024, 3, 31)), 29);
        assert_eq!(days_in_previous_month(date(2023, 3, 1)), 28);
        assert_eq!(days_in_previous_month(date(2023, 1, 1)), 31);
        assert_eq!(days_in_previous_month(date(2023, 5, 20)), 30);
    }
}
