//! Teaching (academic) years, 1 August to 31 July.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{ReferenceError, Result};
use crate::services::AcademicYearDataService;

const START_MONTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AcademicYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl AcademicYear {
    /// Year starting 1 August of `start_year`.
    pub fn new(start_year: i32) -> Result<Self> {
        let invalid = || ReferenceError::InvalidAcademicYear {
            value: start_year.to_string(),
        };
        let start = NaiveDate::from_ymd_opt(start_year, START_MONTH, 1).ok_or_else(invalid)?;
        let end = start_year
            .checked_add(1)
            .and_then(|next| NaiveDate::from_ymd_opt(next, START_MONTH - 1, 31))
            .ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    /// The year `date` falls in.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        let start_year = if date.month() >= START_MONTH {
            date.year()
        } else {
            date.year() - 1
        };
        Self::new(start_year)
    }

    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Short ILR code, e.g. `2526`.
    pub fn code(&self) -> String {
        format!(
            "{:02}{:02}",
            self.start.year().rem_euclid(100),
            self.end.year().rem_euclid(100)
        )
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:02}",
            self.start.year(),
            self.end.year().rem_euclid(100)
        )
    }
}

/// Accepts `2526`, `2025/26` and `2025-26`.
impl FromStr for AcademicYear {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let invalid = || ReferenceError::InvalidAcademicYear {
            value: s.to_string(),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        let (start_year, end_suffix) = match value.split_once(['/', '-']) {
            Some((full, suffix)) if full.len() == 4 && suffix.len() == 2 => {
                if !all_digits(full) || !all_digits(suffix) {
                    return Err(invalid());
                }
                let year: i32 = full.parse().map_err(|_| invalid())?;
                let suffix: i32 = suffix.parse().map_err(|_| invalid())?;
                (year, suffix)
            }
            None if value.len() == 4 && all_digits(value) => {
                let first: i32 = value[..2].parse().map_err(|_| invalid())?;
                let second: i32 = value[2..].parse().map_err(|_| invalid())?;
                (2000 + first, second)
            }
            _ => return Err(invalid()),
        };

        if (start_year + 1).rem_euclid(100) != end_suffix {
            return Err(invalid());
        }
        Self::new(start_year).map_err(|_| invalid())
    }
}

impl AcademicYearDataService for AcademicYear {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}
