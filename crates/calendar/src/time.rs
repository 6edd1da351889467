//! Time of day at minute resolution.

use std::fmt;
use std::str::FromStr;

use crate::clamp::{ClampRule, RawTimestamp};
use crate::error::CalendarError;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Hour and minute within a day, always in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time from raw components, clamping out-of-range values.
    ///
    /// An hour past 23 yields 23:59 whatever the minute; a minute past 59
    /// yields minute 59 of the given hour.
    pub fn new(hour: u8, minute: u8) -> Self {
        let mut raw = RawTimestamp::new(0, 1, 1, hour, minute);
        raw.apply_rules(&ClampRule::TIME);
        raw.time()
    }

    pub(crate) fn from_valid_components(hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    /// Creates a time from minutes since midnight. Values of
    /// [`MINUTES_PER_DAY`] or more saturate to 23:59.
    pub fn from_minute_of_day(minutes: u16) -> Self {
        let hour = u8::try_from(minutes / 60).unwrap_or(u8::MAX);
        Self::new(hour, (minutes % 60) as u8)
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns minutes since midnight (0..=1439).
    pub fn minute_of_day(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    /// Parses `HH:MM`, then clamps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarError::Parse {
            input: s.to_string(),
            expected: "HH:MM",
        };
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        Ok(Self::new(hour, minute))
    }
}
