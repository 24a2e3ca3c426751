use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Calendar year-month, serialized as `YYYY-MM`
///
/// Internally anchored on the first day of the month so ordering is calendar order.
/// Years are bounded to four digits to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Build a month key, `None` when the year or month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(MonthKey)
    }

    /// Month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey(date.with_day(1).unwrap_or(date))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn last_day(self) -> NaiveDate {
        // the successor month always exists for four-digit years
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following calendar month, `None` past the last representable year
    pub fn succ(self) -> Option<Self> {
        let next = self.0.checked_add_months(Months::new(1))?;
        MonthKey::new(next.year(), next.month())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AppError::validation(format!("Invalid month '{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(month: MonthKey) -> Self {
        month.to_string()
    }
}

/// Inclusive range of calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    from: MonthKey,
    to: MonthKey,
}

impl MonthRange {
    /// Fails with `InvalidRange` when `to` precedes `from`
    pub fn new(from: MonthKey, to: MonthKey) -> Result<Self> {
        if to < from {
            return Err(AppError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from_month(&self) -> MonthKey {
        self.from
    }

    pub fn to_month(&self) -> MonthKey {
        self.to
    }

    /// Every month from `from` to `to` inclusive, in chronological order
    pub fn months(&self) -> Vec<MonthKey> {
        let to = self.to;
        std::iter::successors(Some(self.from), |month| month.succ())
            .take_while(|month| *month <= to)
            .collect()
    }

    pub fn contains(&self, month: MonthKey) -> bool {
        self.from <= month && month <= self.to
    }

    /// Absolute date bounds `[first day of from, last day of to]`
    pub fn date_window(&self) -> (NaiveDate, NaiveDate) {
        (self.from.first_day(), self.to.last_day())
    }
}
