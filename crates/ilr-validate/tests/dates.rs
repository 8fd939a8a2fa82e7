//! Calendar arithmetic and derived programme data.

mod common;

use chrono::Days;
use common::{date, delivery, learner, standard_programme};
use ilr_validate::dates::{add_years, age_at, more_than_one_year_after};
use ilr_validate::derived::{earliest_programme_start_date, is_apprenticeship};
use proptest::prelude::*;

#[test]
fn add_years_clamps_leap_day() {
    assert_eq!(add_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
    assert_eq!(add_years(date(2024, 2, 29), 4), Some(date(2028, 2, 29)));
    assert_eq!(add_years(date(2025, 8, 1), -10), Some(date(2015, 8, 1)));
}

#[test]
fn age_counts_completed_years() {
    let dob = date(2009, 9, 1);
    assert_eq!(age_at(dob, date(2025, 8, 31)), 15);
    assert_eq!(age_at(dob, date(2025, 9, 1)), 16);
    assert_eq!(age_at(dob, dob), 0);
}

#[test]
fn one_year_boundary_is_inclusive() {
    let anchor = date(2026, 7, 31);
    assert!(!more_than_one_year_after(date(2027, 7, 31), anchor));
    assert!(more_than_one_year_after(date(2027, 8, 1), anchor));
}

#[test]
fn apprenticeship_programme_types() {
    assert!(is_apprenticeship(Some(25)));
    assert!(is_apprenticeship(Some(3)));
    assert!(!is_apprenticeship(Some(24)));
    assert!(!is_apprenticeship(None));
}

#[test]
fn earliest_start_matches_whole_programme() {
    let mut first = standard_programme(1);
    first.learn_start_date = date(2024, 9, 1);
    let second = standard_programme(2);
    let mut other_standard = standard_programme(3);
    other_standard.std_code = Some(456);
    other_standard.learn_start_date = date(2020, 1, 1);
    let mut component = delivery(4, 3, 36);
    component.prog_type = Some(25);
    component.std_code = Some(123);
    let subject = learner(vec![first, second, other_standard, component.clone()]);

    assert_eq!(
        earliest_programme_start_date(&subject, &component),
        Some(date(2024, 9, 1))
    );

    component.prog_type = None;
    assert_eq!(earliest_programme_start_date(&subject, &component), None);
}

proptest! {
    #[test]
    fn age_after_whole_years(year in 1950i32..2020, month in 1u32..=12, day in 1u32..=28, years in 0i32..80) {
        let dob = date(year, month, day);
        let birthday = add_years(dob, years).unwrap();
        prop_assert_eq!(age_at(dob, birthday), years);
        prop_assert_eq!(age_at(dob, birthday.pred_opt().unwrap()), years - 1);
    }

    #[test]
    fn one_year_limit_is_a_calendar_year(year in 1990i32..2040, ordinal in 1u32..=365) {
        let anchor = chrono::NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let limit = add_years(anchor, 1).unwrap();
        prop_assert!(!more_than_one_year_after(limit, anchor));
        prop_assert!(more_than_one_year_after(limit + Days::new(1), anchor));
    }
}
