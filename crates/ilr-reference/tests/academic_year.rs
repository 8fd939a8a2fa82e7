use chrono::{Datelike, Days, NaiveDate};
use ilr_reference::{AcademicYear, AcademicYearDataService, ReferenceError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_short_and_long_codes() {
    for input in ["2526", "2025/26", "2025-26", " 2025/26 "] {
        let year: AcademicYear = input.parse().unwrap();
        assert_eq!(year.start(), date(2025, 8, 1), "{input}");
        assert_eq!(year.end(), date(2026, 7, 31), "{input}");
        assert_eq!(year.code(), "2526");
        assert_eq!(year.to_string(), "2025/26");
    }
}

#[test]
fn century_boundary() {
    let year: AcademicYear = "2099/00".parse().unwrap();
    assert_eq!(year.end(), date(2100, 7, 31));
    assert_eq!(year.code(), "9900");
}

#[test]
fn rejects_inconsistent_or_malformed_codes() {
    for input in ["2527", "2025/27", "25/26", "2025", "abcd", "", "2025/2x"] {
        let err = input.parse::<AcademicYear>().unwrap_err();
        assert!(
            matches!(err, ReferenceError::InvalidAcademicYear { .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn containing_splits_on_first_of_august() {
    assert_eq!(
        AcademicYear::containing(date(2025, 7, 31)).unwrap().start_year(),
        2024
    );
    assert_eq!(
        AcademicYear::containing(date(2025, 8, 1)).unwrap().start_year(),
        2025
    );
}

proptest! {
    #[test]
    fn containing_year_contains_date(days in 0u64..40_000) {
        let day = date(1990, 1, 1).checked_add_days(Days::new(days)).unwrap();
        let year = AcademicYear::containing(day).unwrap();
        prop_assert!(year.contains(day));
        prop_assert_eq!(year.start().month(), 8);
        prop_assert_eq!(year.start().day(), 1);
        prop_assert_eq!(year.end().year(), year.start().year() + 1);
    }

    #[test]
    fn code_round_trips(start_year in 2000i32..2099) {
        let year = AcademicYear::new(start_year).unwrap();
        let reparsed: AcademicYear = year.code().parse().unwrap();
        prop_assert_eq!(reparsed, year);
        let long: AcademicYear = year.to_string().parse().unwrap();
        prop_assert_eq!(long, year);
    }
}
