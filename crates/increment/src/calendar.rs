//! Workday calendar configuration.

use workday_calendar::{Date, TimeOfDay};

use crate::error::WorkdayError;
use crate::holidays::Holidays;
use crate::window::WorkdayWindow;

/// Working window plus holidays, queried by
/// [`WorkdayCalendar::increment`].
///
/// Saturdays and Sundays are never working days. Holidays can only be
/// added, never removed. Mutation needs `&mut self`, so a calendar shared
/// between threads must be wrapped by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayCalendar {
    window: WorkdayWindow,
    holidays: Holidays,
}

impl WorkdayCalendar {
    /// Creates a calendar with the default 08:00-16:00 window and no
    /// holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working window.
    pub fn with_window(mut self, window: WorkdayWindow) -> Self {
        self.window = window;
        self
    }

    /// Adds a fixed holiday.
    pub fn with_fixed_holiday(mut self, date: Date) -> Self {
        self.holidays.add_fixed(date);
        self
    }

    /// Adds a recurring holiday; the year of `date` is ignored.
    pub fn with_recurring_holiday(mut self, date: Date) -> Self {
        self.holidays.add_recurring(date);
        self
    }

    /// Replaces the working window.
    pub fn set_workday(&mut self, window: WorkdayWindow) {
        self.window = window;
    }

    /// Replaces the working window from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`WorkdayError::InvalidWindow`] if `stop` is not strictly
    /// later than `start`. The calendar is left unchanged in that case.
    pub fn set_workday_hours(
        &mut self,
        start: TimeOfDay,
        stop: TimeOfDay,
    ) -> Result<(), WorkdayError> {
        self.window = WorkdayWindow::new(start, stop)?;
        Ok(())
    }

    /// Adds a holiday for this exact date.
    pub fn add_fixed_holiday(&mut self, date: Date) {
        self.holidays.add_fixed(date);
    }

    /// Adds a holiday on this month and day of every year.
    pub fn add_recurring_holiday(&mut self, date: Date) {
        self.holidays.add_recurring(date);
    }

    pub fn window(&self) -> WorkdayWindow {
        self.window
    }

    pub fn holidays(&self) -> &Holidays {
        &self.holidays
    }

    /// Returns `true` if `date` is a fixed or recurring holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    /// Returns `true` if `date` is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_holiday(date)
    }
}
