use chrono::{Days, NaiveDate};
use ethiopic_date::{
    EcDate, FormatStyle, Locale, add_days_ec, diff_days_ec, ec_to_gregorian, format_ec,
    gregorian_to_ec, is_valid_ec_date, pagume_days, parse_ec_date,
};
use proptest::prelude::*;

fn greg(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Strategy producing only valid Ethiopian dates, Pagume included.
fn valid_ec_date() -> impl Strategy<Value = EcDate> {
    (1i32..=9999, 1u32..=13).prop_flat_map(|(year, month)| {
        let max_day = if month == 13 { pagume_days(year) } else { 30 };
        (1u32..=max_day).prop_map(move |day| EcDate { year, month, day })
    })
}

#[test]
fn every_gregorian_day_round_trips() {
    // Spans the 1900, 2000 and 2100 century years
    let end = greg(2110, 12, 31);
    let mut day = greg(1890, 1, 1);
    let mut previous: Option<EcDate> = None;

    while day <= end {
        let ec = gregorian_to_ec(day);
        assert!(is_valid_ec_date(ec), "{day} converted to invalid {ec:?}");
        assert_eq!(ec_to_gregorian(ec).unwrap(), day, "{day} via {ec}");
        if let Some(prev) = previous {
            assert!(prev < ec, "{prev} should precede {ec}");
        }
        previous = Some(ec);
        day = day.checked_add_days(Days::new(1)).unwrap();
    }
}

#[test]
fn every_ethiopian_day_round_trips() {
    for year in 1880..=2105 {
        for month in 1..=13 {
            let max_day = if month == 13 { pagume_days(year) } else { 30 };
            for day in 1..=max_day {
                let ec = EcDate { year, month, day };
                let gregorian = ec_to_gregorian(ec).unwrap();
                assert_eq!(gregorian_to_ec(gregorian), ec);
            }
        }
    }
}

#[test]
fn pagume_boundaries_by_leap_year() {
    for year in 2010..=2030 {
        let last = EcDate { year, month: 13, day: 6 };
        assert_eq!(is_valid_ec_date(last), year % 4 == 3, "Pagume 6 in {year}");
        assert!(!is_valid_ec_date(EcDate { year, month: 13, day: 7 }));

        // Day after the last Pagume day is always the next Meskerem 1
        let final_day = EcDate { year, month: 13, day: pagume_days(year) };
        assert_eq!(
            add_days_ec(final_day, 1).unwrap(),
            EcDate { year: year + 1, month: 1, day: 1 }
        );
    }
}

proptest! {
    #[test]
    fn gregorian_round_trip(days in 0i32..3_650_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(days + 1).unwrap();
        let ec = gregorian_to_ec(date);
        prop_assert_eq!(ec_to_gregorian(ec).unwrap(), date);
    }

    #[test]
    fn ethiopian_round_trip(ec in valid_ec_date()) {
        let gregorian = ec_to_gregorian(ec).unwrap();
        prop_assert_eq!(gregorian_to_ec(gregorian), ec);
    }

    #[test]
    fn iso_format_parse_is_idempotent(ec in valid_ec_date()) {
        let iso = format_ec(ec, Locale::English, FormatStyle::Iso);
        let parsed = parse_ec_date(&iso).unwrap();
        prop_assert_eq!(parsed, ec);
        prop_assert_eq!(format_ec(parsed, Locale::Amharic, FormatStyle::Iso), iso);
    }

    #[test]
    fn add_then_diff_agree(ec in valid_ec_date(), days in -100_000i64..100_000) {
        let moved = add_days_ec(ec, days).unwrap();
        prop_assert_eq!(diff_days_ec(ec, moved).unwrap(), days);
        prop_assert_eq!(add_days_ec(moved, -days).unwrap(), ec);
    }

    #[test]
    fn ordering_matches_gregorian_order(a in valid_ec_date(), b in valid_ec_date()) {
        let ga = ec_to_gregorian(a).unwrap();
        let gb = ec_to_gregorian(b).unwrap();
        prop_assert_eq!(a.cmp(&b), ga.cmp(&gb));
    }

    #[test]
    fn serde_round_trip(ec in valid_ec_date()) {
        let json = serde_json::to_string(&ec).unwrap();
        let back: EcDate = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ec);
    }
}
