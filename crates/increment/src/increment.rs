//! The workday increment engine.

use tracing::debug;
use workday_calendar::{Date, DateTime};

use crate::calendar::WorkdayCalendar;
use crate::error::WorkdayError;
use crate::window::Carry;

/// Direction of travel through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Zero and positive increments (including `-0.0`) travel forward.
    fn of(workdays: f64) -> Self {
        if workdays >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Moves one calendar day.
    fn step(self, date: Date) -> Result<Date, WorkdayError> {
        match self {
            Direction::Forward => date.succ(),
            Direction::Backward => date.pred(),
        }
        .ok_or(WorkdayError::DateOutOfRange)
    }
}

impl WorkdayCalendar {
    /// Adds `workdays` working days to `start`.
    ///
    /// The integer part counts whole working days; the fractional part is a
    /// share of the working window's length. Negative values move backwards.
    ///
    /// 1. The start time is clamped into the window, then moved by
    ///    `floor(window_minutes * fract(workdays))` minutes. Overshooting an
    ///    endpoint carries the excess to the other endpoint of the next (or
    ///    previous) calendar day.
    /// 2. If the resulting date is a weekend day or holiday it is moved, one
    ///    day at a time in the direction of travel, onto a working day.
    /// 3. The date then advances `|trunc(workdays)|` working days; weekend
    ///    days and holidays passed on the way are not counted.
    ///
    /// # Errors
    ///
    /// * [`WorkdayError::NonFiniteIncrement`] if `workdays` is NaN or infinite.
    /// * [`WorkdayError::NoWorkingDays`] if every month-day is a recurring
    ///   holiday.
    /// * [`WorkdayError::DateOutOfRange`] if the result would fall outside the
    ///   supported year range.
    ///
    /// # Examples
    ///
    /// ```
    /// use workday_calendar::{Date, DateTime};
    /// use workday_increment::WorkdayCalendar;
    ///
    /// let calendar = WorkdayCalendar::new()
    ///     .with_recurring_holiday(Date::new(2004, 5, 17))
    ///     .with_fixed_holiday(Date::new(2004, 5, 27));
    ///
    /// let start = DateTime::from_components(2004, 5, 24, 18, 5);
    /// let result = calendar.increment(start, -5.5).unwrap();
    /// assert_eq!(result, DateTime::from_components(2004, 5, 14, 12, 0));
    /// ```
    #[tracing::instrument(level = "debug", skip(self, start), fields(start = %start))]
    pub fn increment(&self, start: DateTime, workdays: f64) -> Result<DateTime, WorkdayError> {
        if !workdays.is_finite() {
            return Err(WorkdayError::NonFiniteIncrement { value: workdays });
        }
        if self.holidays().covers_every_day() {
            return Err(WorkdayError::NoWorkingDays);
        }

        let direction = Direction::of(workdays);
        let offset = self.window().fraction_minutes(workdays.fract());
        let (time, carry) = self.window().shift(start.time(), offset);

        let date = match carry {
            Carry::None => start.date(),
            Carry::PreviousDay => Direction::Backward.step(start.date())?,
            Carry::NextDay => Direction::Forward.step(start.date())?,
        };
        let date = self.settle(date, direction)?;
        let date = self.step_working_days(date, direction, workdays.trunc().abs() as u64)?;

        let result = start.with_date(date).with_time(time);
        debug!(%result, offset_minutes = offset, ?carry, "increment resolved");
        Ok(result)
    }

    /// Moves `date` onto the nearest working day in `direction`, or leaves
    /// it where it is if it already is one.
    fn settle(&self, mut date: Date, direction: Direction) -> Result<Date, WorkdayError> {
        while !self.is_working_day(date) {
            date = direction.step(date)?;
        }
        Ok(date)
    }

    fn step_working_days(
        &self,
        mut date: Date,
        direction: Direction,
        mut remaining: u64,
    ) -> Result<Date, WorkdayError> {
        while remaining > 0 {
            date = direction.step(date)?;
            if self.is_working_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }
}
