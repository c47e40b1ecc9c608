//! Calendar-month key for payroll records.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// A calendar month, the period key of every payroll record.
///
/// Months are totally ordered (year first, then month), so "the
/// chronologically greatest month" of an employee's history is well defined.
/// The textual form is `yyyy-MM`, which is also how the month is stored in
/// the payroll log.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::PayMonth;
///
/// let june: PayMonth = "2024-06".parse().unwrap();
/// assert_eq!(june, PayMonth { year: 2024, month: 6 });
/// assert_eq!(june.to_string(), "2024-06");
///
/// let march: PayMonth = "2024-03".parse().unwrap();
/// assert!(march < june);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayMonth {
    /// The calendar year.
    pub year: i32,
    /// The month of year, 1 through 12.
    pub month: u32,
}

impl PayMonth {
    /// Returns the month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        PayMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true if the date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayMonth {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PayrollError::InvalidMonth {
            value: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(PayMonth { year, month })
    }
}

impl Serialize for PayMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PayMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
