//! Proleptic Gregorian calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::clamp::{ClampRule, RawTimestamp};
use crate::error::CalendarError;

/// Earliest supported year.
pub const MIN_YEAR: i32 = i16::MIN as i32;

/// Latest supported year.
pub const MAX_YEAR: i32 = i16::MAX as i32;

/// A calendar-valid date in the proleptic Gregorian calendar.
///
/// Years are limited to the `i16` range. Construction from raw components
/// clamps instead of failing, see [`ClampRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from raw components, clamping out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use workday_calendar::Date;
    ///
    /// let date = Date::new(2025, 2, 29);
    /// assert_eq!((date.month(), date.day()), (2, 28));
    /// ```
    pub fn new(year: i16, month: u8, day: u8) -> Self {
        let mut raw = RawTimestamp::new(year, month, day, 0, 0);
        raw.apply_rules(&ClampRule::DATE);
        raw.date()
    }

    /// Wraps a chrono date, or returns `None` if its year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// Builds a date from components the date rules have already repaired.
    pub(crate) fn from_valid_components(year: i16, month: u8, day: u8) -> Self {
        let date = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .expect("clamped components always form a valid date");
        Self(date)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month(), self.day())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` on Saturdays and Sundays.
    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the following day, or `None` past [`MAX_YEAR`].
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().and_then(Self::from_naive)
    }

    /// Returns the preceding day, or `None` before [`MIN_YEAR`].
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().and_then(Self::from_naive)
    }

    /// Returns the underlying chrono date.
    pub fn to_naive(self) -> NaiveDate {
        self.0
    }
}

/// Returns `true` if `year` has a February 29.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        4 | 6 | 9 | 11 => Some(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        _ => None,
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` (the year may carry a leading `-`), then clamps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarError::Parse {
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        };
        let (negative, rest) = match s.trim().strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.trim()),
        };
        let mut parts = rest.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        let magnitude: i32 = y.parse().map_err(|_| err())?;
        let year = i16::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| err())?;
        let month: u8 = m.parse().map_err(|_| err())?;
        let day: u8 = d.parse().map_err(|_| err())?;
        Ok(Self::new(year, month, day))
    }
}
