//! The working window within a day.

use workday_calendar::TimeOfDay;

use crate::error::WorkdayError;

/// Day boundary crossed when a shifted time leaves the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Carry {
    None,
    PreviousDay,
    NextDay,
}

/// A single contiguous span of working time, `start` < `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkdayWindow {
    start: TimeOfDay,
    stop: TimeOfDay,
}

impl WorkdayWindow {
    /// Creates a window from its two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`WorkdayError::InvalidWindow`] if `stop` is not strictly
    /// later than `start`.
    pub fn new(start: TimeOfDay, stop: TimeOfDay) -> Result<Self, WorkdayError> {
        if stop <= start {
            return Err(WorkdayError::InvalidWindow { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Returns the first minute of the window.
    pub fn start(self) -> TimeOfDay {
        self.start
    }

    /// Returns the last minute of the window.
    pub fn stop(self) -> TimeOfDay {
        self.stop
    }

    /// Returns the length of the window in minutes (always > 0).
    pub fn duration_minutes(self) -> u16 {
        self.stop.minute_of_day() - self.start.minute_of_day()
    }

    /// Returns `true` if `time` lies within the window, endpoints included.
    pub fn contains(self, time: TimeOfDay) -> bool {
        (self.start..=self.stop).contains(&time)
    }

    /// Moves a time outside the window onto its nearest endpoint.
    pub fn clamp(self, time: TimeOfDay) -> TimeOfDay {
        time.clamp(self.start, self.stop)
    }

    /// Scales a fraction of a workday (in -1..1) to whole minutes, rounding
    /// toward negative infinity.
    pub(crate) fn fraction_minutes(self, fraction: f64) -> i32 {
        (f64::from(self.duration_minutes()) * fraction).floor() as i32
    }

    /// Clamps `time` into the window and moves it by `offset` minutes.
    ///
    /// A result past either endpoint is carried minute-for-minute to the
    /// opposite endpoint of the neighbouring day. `offset` must be shorter
    /// than the window, so one carry always suffices.
    pub(crate) fn shift(self, time: TimeOfDay, offset: i32) -> (TimeOfDay, Carry) {
        let start = i32::from(self.start.minute_of_day());
        let stop = i32::from(self.stop.minute_of_day());
        let moved = i32::from(self.clamp(time).minute_of_day()) + offset;

        let (minutes, carry) = if moved < start {
            (stop - (start - moved), Carry::PreviousDay)
        } else if moved > stop {
            (start + (moved - stop), Carry::NextDay)
        } else {
            (moved, Carry::None)
        };
        let minutes = u16::try_from(minutes).expect("carried time stays inside the window");
        let time = TimeOfDay::from_minute_of_day(minutes);
        debug_assert!(self.contains(time));
        (time, carry)
    }
}

impl Default for WorkdayWindow {
    /// 08:00 to 16:00.
    fn default() -> Self {
        Self {
            start: TimeOfDay::new(8, 0),
            stop: TimeOfDay::new(16, 0),
        }
    }
}
