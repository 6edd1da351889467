//! Saturating normalisation of raw timestamp components.
//!
//! Raw components are never rejected. Each [`ClampRule`] repairs one kind of
//! out-of-range value, and the rules always run in the order they are
//! declared, so a later rule sees the output of an earlier one.

use tracing::debug;

use crate::date::{Date, days_in_month};
use crate::datetime::DateTime;
use crate::time::TimeOfDay;

/// Unvalidated year, month, day, hour and minute components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTimestamp {
    /// Calendar year.
    pub year: i16,
    /// Month number, expected in 1..=12.
    pub month: u8,
    /// Day of month, expected in 1..=31 and valid for the month.
    pub day: u8,
    /// Hour, expected in 0..=23.
    pub hour: u8,
    /// Minute, expected in 0..=59.
    pub minute: u8,
}

/// One step of the clamp policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClampRule {
    /// A day past the end of the month becomes the last day of the month.
    ///
    /// A month outside 1..=12 has no length of its own. It is given 30 or 31
    /// days by the same bit pattern that yields the lengths of the real
    /// months (30 for months 0, 13 and 15, 31 for month 14), capped at 31.
    DayPastMonthEnd,
    /// Day 0 becomes day 1.
    DayZero,
    /// A month outside 1..=12 becomes January. The day is kept as is.
    MonthOutOfRange,
    /// An hour past 23 becomes 23:59, whatever the minute was.
    HourOutOfRange,
    /// A minute past 59 becomes 59. The hour is kept as is.
    MinuteOutOfRange,
}

impl ClampRule {
    /// Rules that touch the date components, in evaluation order.
    pub const DATE: [ClampRule; 3] = [
        ClampRule::DayPastMonthEnd,
        ClampRule::DayZero,
        ClampRule::MonthOutOfRange,
    ];

    /// Rules that touch the time components, in evaluation order.
    pub const TIME: [ClampRule; 2] = [ClampRule::HourOutOfRange, ClampRule::MinuteOutOfRange];

    /// The full policy, in evaluation order.
    pub const ALL: [ClampRule; 5] = [
        ClampRule::DayPastMonthEnd,
        ClampRule::DayZero,
        ClampRule::MonthOutOfRange,
        ClampRule::HourOutOfRange,
        ClampRule::MinuteOutOfRange,
    ];

    /// Applies this rule to `raw`, returning `true` if a component changed.
    pub fn apply(self, raw: &mut RawTimestamp) -> bool {
        match self {
            ClampRule::DayPastMonthEnd => {
                let max_day = days_in_month(raw.year.into(), raw.month)
                    .unwrap_or_else(|| out_of_range_month_length(raw.month));
                if raw.day > max_day {
                    raw.day = max_day;
                    return true;
                }
            }
            ClampRule::DayZero => {
                if raw.day == 0 {
                    raw.day = 1;
                    return true;
                }
            }
            ClampRule::MonthOutOfRange => {
                if !(1..=12).contains(&raw.month) {
                    raw.month = 1;
                    return true;
                }
            }
            ClampRule::HourOutOfRange => {
                if raw.hour > 23 {
                    raw.hour = 23;
                    raw.minute = 59;
                    return true;
                }
            }
            ClampRule::MinuteOutOfRange => {
                if raw.minute > 59 {
                    raw.minute = 59;
                    return true;
                }
            }
        }
        false
    }
}

/// `30 | (m ^ (m >> 3))` gives every month but February its length. Values
/// past 31 only occur for months above 15.
fn out_of_range_month_length(month: u8) -> u8 {
    (30 | (month ^ (month >> 3))).min(31)
}

impl RawTimestamp {
    /// Bundles raw components without checking them.
    pub fn new(year: i16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Applies the whole clamp policy and builds the resulting [`DateTime`].
    pub fn normalize(self) -> DateTime {
        self.normalize_with_report().0
    }

    /// Like [`RawTimestamp::normalize`], also returning the rules that fired,
    /// in the order they fired.
    pub fn normalize_with_report(mut self) -> (DateTime, Vec<ClampRule>) {
        let fired = self.apply_rules(&ClampRule::ALL);
        (DateTime::new(self.date(), self.time()), fired)
    }

    /// Runs `rules` in order and returns those that changed a component.
    pub(crate) fn apply_rules(&mut self, rules: &[ClampRule]) -> Vec<ClampRule> {
        let mut fired = Vec::new();
        for &rule in rules {
            let before = *self;
            if rule.apply(self) {
                debug!(?rule, ?before, after = ?*self, "clamped timestamp component");
                fired.push(rule);
            }
        }
        fired
    }

    /// Builds the date part. Only valid after the date rules have run.
    pub(crate) fn date(&self) -> Date {
        Date::from_valid_components(self.year, self.month, self.day)
    }

    /// Builds the time part. Only valid after the time rules have run.
    pub(crate) fn time(&self) -> TimeOfDay {
        TimeOfDay::from_valid_components(self.hour, self.minute)
    }
}
