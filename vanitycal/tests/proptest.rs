use jiff::civil::Date;
use proptest::prelude::*;
use vanitycal::calendar::{add_days, add_years};
use vanitycal::expand;
use vanitycal::label::Elapsed;
use vanitycal::{
    countdown_label, duration_label, AnchorDate, AnchorEvent, AnniversaryPattern, Calendar, Clock,
    Label,
};

/// Any valid date between 1900 and 2100, month ends and leap days included.
fn arb_date() -> impl Strategy<Value = Date> {
    (1900i16..2100, 1i8..=12, 1i8..=31).prop_filter_map("valid calendar date", |(y, m, d)| {
        Date::new(y, m, d).ok()
    })
}

fn arb_offsets(range: std::ops::Range<u32>) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(range, 0..6)
}

/// Day offsets may include 0 (D-Day); month and year offsets start at 1.
fn arb_pattern() -> impl Strategy<Value = AnniversaryPattern> {
    (arb_offsets(0..20_000), arb_offsets(1..120), arb_offsets(1..60))
        .prop_map(|(days, months, years)| AnniversaryPattern::new(days, months, years))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn same_day_is_d_day(d in arb_date()) {
        prop_assert_eq!(duration_label(d, d), Label::DDay);
    }

    /// Landing on `add_years` is always a whole-year label, including the
    /// Feb 29 -> Mar 1 rollover.
    #[test]
    fn whole_years_round_trip(d in arb_date(), y in 1i64..60) {
        let end = add_years(d, y).unwrap();
        prop_assert_eq!(duration_label(d, end).to_string(), format!("{y}y"));
    }

    /// Years and months are never dropped from a decomposed label.
    #[test]
    fn decomposed_label_keeps_years_and_months(y in 1i64..100, m in 1i64..12, d in 0i64..31) {
        let label = Label::Elapsed(Elapsed::new(y, m, d)).to_string();
        prop_assert!(label.contains("y "), "{}", label);
        prop_assert!(label.starts_with(&format!("{y}y {m}m")), "{}", label);
    }

    #[test]
    fn countdown_from_on_or_after_anchor_is_d_day(to in arb_date(), back in 0i64..4000) {
        let from = add_days(to, back).unwrap();
        prop_assert_eq!(countdown_label(from, to), Label::DDay);
    }

    #[test]
    fn elapsed_milestones_beat_decomposition(
        d in arb_date(),
        n in prop_oneof![Just(7i64), Just(100), Just(1000), Just(10000)],
    ) {
        let end = add_days(d, n).unwrap();
        prop_assert_eq!(duration_label(d, end).to_string(), format!("{n}d"));
    }

    #[test]
    fn countdown_milestones_win(
        to in arb_date(),
        n in prop_oneof![
            Just(1i64), Just(2), Just(3), Just(5), Just(7), Just(10), Just(30),
            Just(60), Just(90), Just(100), Just(365), Just(1000),
        ],
    ) {
        let from = add_days(to, -n).unwrap();
        prop_assert_eq!(countdown_label(from, to).to_string(), format!("D-{n}"));
    }

    /// One anniversary per configured offset, and the anchor itself is
    /// labeled D-DAY whenever the day offsets include zero.
    #[test]
    fn anniversary_count_and_d_day(anchor in arb_date(), pattern in arb_pattern()) {
        let dates = expand::anniversaries(anchor, &pattern).unwrap();
        prop_assert_eq!(
            dates.len(),
            pattern.days.len() + pattern.months.len() + pattern.years.len()
        );

        let event = AnchorEvent::new("e", AnchorDate::Full(anchor)).unwrap();
        let calendar = Calendar::new(vec![event]).with_pattern(pattern.clone());
        // Far enough ahead that every anchor is in the past.
        let clock = Clock::on_date(Date::new(2200, 1, 1).unwrap()).unwrap();
        let occ = calendar.occurrences(&clock).unwrap();
        let has_d_day = occ
            .iter()
            .any(|o| o.date == anchor && o.label == Some(Label::DDay));
        prop_assert_eq!(has_d_day, pattern.includes_d_day());
    }

    /// Countdown steps land strictly between today and the anchor.
    #[test]
    fn countdowns_strictly_between(
        today in arb_date(),
        ahead in 1i64..5000,
        pattern in arb_pattern(),
    ) {
        let anchor = add_days(today, ahead).unwrap();
        let clock = Clock::on_date(today).unwrap();
        for date in expand::countdowns(anchor, &pattern, &clock) {
            prop_assert!(date > today && date < anchor, "{} not in ({}, {})", date, today, anchor);
        }
    }

    #[test]
    fn recurring_is_three_consecutive_years(today in arb_date(), month in 1i8..=12, day in 1i8..=28) {
        let clock = Clock::on_date(today).unwrap();
        let dates = expand::recurring(month, day, &clock).unwrap();
        let years: Vec<i16> = dates.iter().map(|d| d.year()).collect();
        prop_assert_eq!(years, vec![today.year() - 1, today.year(), today.year() + 1]);
    }
}
