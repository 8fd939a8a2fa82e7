//! Calendar arithmetic used by the date rules.

use chrono::{Datelike, Months, NaiveDate};

/// `date` moved by whole calendar years; 29 February lands on 28 February
/// in non-leap years. `None` only outside chrono's date range.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Age in completed years on `on`.
pub fn age_at(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// True when `date` is strictly more than one calendar year after `anchor`.
pub fn more_than_one_year_after(date: NaiveDate, anchor: NaiveDate) -> bool {
    add_years(anchor, 1).is_some_and(|limit| date > limit)
}
