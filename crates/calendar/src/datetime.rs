//! Date plus time of day.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::clamp::RawTimestamp;
use crate::date::Date;
use crate::error::CalendarError;
use crate::time::TimeOfDay;

/// A calendar date with a time of day, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

impl DateTime {
    /// Pairs an already valid date and time.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Creates a date-time from raw components, applying every
    /// [`ClampRule`](crate::ClampRule) in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use workday_calendar::DateTime;
    ///
    /// let value = DateTime::from_components(2025, 2, 29, 24, 0);
    /// assert_eq!(value.to_string(), "2025-02-28 23:59");
    /// ```
    pub fn from_components(year: i16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        RawTimestamp::new(year, month, day, hour, minute).normalize()
    }

    /// Returns the date part.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the time part.
    pub fn time(self) -> TimeOfDay {
        self.time
    }

    /// Returns a copy with the date replaced.
    pub fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }

    /// Returns a copy with the time replaced.
    pub fn with_time(self, time: TimeOfDay) -> Self {
        Self { time, ..self }
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Month, 1 to 12.
    pub fn month(self) -> u8 {
        self.date.month()
    }

    /// Day of month.
    pub fn day(self) -> u8 {
        self.date.day()
    }

    /// Hour, 0 to 23.
    pub fn hour(self) -> u8 {
        self.time.hour()
    }

    /// Minute, 0 to 59.
    pub fn minute(self) -> u8 {
        self.time.minute()
    }

    /// Returns the equivalent chrono value with zero seconds.
    pub fn to_naive(self) -> NaiveDateTime {
        self.date
            .to_naive()
            .and_hms_opt(self.time.hour().into(), self.time.minute().into(), 0)
            .expect("TimeOfDay is always a valid wall-clock time")
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`, then clamps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (date, time) = trimmed
            .split_once(['T', ' '])
            .ok_or_else(|| CalendarError::Parse {
                input: s.to_string(),
                expected: "YYYY-MM-DD HH:MM",
            })?;
        Ok(Self::new(date.parse()?, time.parse()?))
    }
}
